// Page shell
pub const PAGE: &str = "min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-white transition-colors duration-300";
pub const SECTION: &str = "py-20 px-4 sm:px-6 lg:px-8";
pub const SECTION_ALT: &str = "py-20 px-4 sm:px-6 lg:px-8 bg-gray-50 dark:bg-gray-800";
pub const CONTAINER: &str = "max-w-7xl mx-auto";
pub const SECTION_HEADING: &str = "text-center mb-16";
pub const SECTION_TITLE: &str = "text-4xl md:text-5xl font-bold mb-4";
pub const SECTION_RULE: &str = "w-24 h-1 bg-gradient-to-r from-blue-600 to-purple-600 mx-auto mb-6";
pub const SECTION_SUBTITLE: &str = "text-xl text-gray-600 dark:text-gray-300 max-w-3xl mx-auto";
pub const GRADIENT_TEXT: &str = "bg-gradient-to-r from-blue-600 via-purple-600 to-pink-600 bg-clip-text text-transparent";

// Header
pub const NAV: &str = "fixed top-0 w-full z-40 bg-white/90 dark:bg-gray-900/90 backdrop-blur-md border-b border-gray-200 dark:border-gray-800 transition-colors duration-300";
pub const NAV_INNER: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex justify-between items-center h-16";
pub const NAV_BRAND: &str = "relative text-2xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent cursor-pointer";
pub const NAV_BRAND_UNDERLINE: &str = "brand-underline absolute -bottom-1 left-0 h-0.5 bg-gradient-to-r from-blue-600 to-purple-600";
pub const NAV_ITEM: &str = "relative flex items-center gap-2 px-4 py-2 rounded-lg text-sm font-medium transition-colors duration-200";
pub const NAV_ITEM_ACTIVE: &str = "text-blue-600 dark:text-blue-400 bg-blue-50 dark:bg-blue-900/30";
pub const NAV_ITEM_IDLE: &str = "text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 hover:bg-gray-100 dark:hover:bg-gray-800";
pub const ICON_BUTTON: &str = "p-2 rounded-lg bg-gray-100 dark:bg-gray-800 text-gray-700 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors duration-200";
pub const MOBILE_PANEL: &str = "md:hidden bg-white dark:bg-gray-900 border-t border-gray-200 dark:border-gray-800 motion-fade-in";
pub const MOBILE_ITEM: &str = "flex items-center gap-3 w-full text-left px-4 py-3 rounded-lg text-base font-medium transition-colors duration-200";

// Buttons
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center gap-2 px-8 py-4 bg-gradient-to-r from-blue-600 to-purple-600 text-white font-semibold rounded-full shadow-lg hover:shadow-xl transform hover:scale-105 transition-all duration-300 disabled:opacity-60 disabled:cursor-not-allowed disabled:hover:scale-100";
pub const BUTTON_OUTLINE: &str = "inline-flex items-center justify-center gap-2 px-8 py-4 border-2 border-blue-600 text-blue-600 dark:text-blue-400 font-semibold rounded-full hover:bg-blue-600 hover:text-white transition-all duration-300";

// Cards
pub const CARD: &str = "bg-white dark:bg-gray-900 rounded-2xl p-8 shadow-lg hover:shadow-2xl border border-gray-100 dark:border-gray-700 transition-all duration-300 hover:-translate-y-2";
pub const CARD_ICON: &str = "w-16 h-16 bg-gradient-to-r from-blue-600 to-purple-600 rounded-2xl flex items-center justify-center text-white mb-6";
pub const STAT_CARD: &str = "text-center p-6 rounded-2xl bg-white/70 dark:bg-gray-800/70 backdrop-blur shadow-md";
pub const TAG: &str = "px-3 py-1 text-xs font-medium rounded-full bg-blue-100 dark:bg-blue-900/30 text-blue-700 dark:text-blue-300";

// Contact form
pub const FIELD_LABEL: &str = "block text-sm font-medium text-gray-700 dark:text-gray-300 mb-2";
pub const INPUT: &str = "w-full px-4 py-3 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-800 text-gray-900 dark:text-white focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-colors duration-200";
pub const INPUT_INVALID: &str = "border-red-500 dark:border-red-500";
pub const FIELD_ERROR: &str = "mt-1 text-sm text-red-600 dark:text-red-400";
pub const ALERT_SUCCESS: &str = "p-4 rounded-lg bg-green-100 dark:bg-green-900/30 text-green-700 dark:text-green-300 motion-fade-in";
pub const ALERT_ERROR: &str = "p-4 rounded-lg bg-red-100 dark:bg-red-900/30 text-red-700 dark:text-red-300 motion-fade-in";

// Footer
pub const FOOTER: &str = "bg-gray-900 text-white py-16 px-4 sm:px-6 lg:px-8";
pub const FOOTER_HEADING: &str = "text-lg font-semibold mb-4";
pub const FOOTER_LINK: &str = "text-gray-400 hover:text-white transition-colors duration-200";
pub const SOCIAL_BUTTON: &str = "w-10 h-10 bg-gray-800 rounded-full flex items-center justify-center text-gray-400 hover:text-white hover:bg-gradient-to-r hover:from-blue-600 hover:to-purple-600 transition-all duration-300";

/// Keyframes behind `Motion`, the reveal gate and the hero decorations.
pub const ANIMATIONS_CSS: &str = r#"
@keyframes motion-fade-in { from { opacity: 0; } to { opacity: 1; } }
@keyframes motion-fade-in-up { from { opacity: 0; transform: translateY(60px); } to { opacity: 1; transform: translateY(0); } }
@keyframes motion-scale-in { from { opacity: 0; transform: scale(0.8); } to { opacity: 1; transform: scale(1); } }
@keyframes motion-slide-in-left { from { opacity: 0; transform: translateX(-60px); } to { opacity: 1; transform: translateX(0); } }
@keyframes motion-slide-in-right { from { opacity: 0; transform: translateX(60px); } to { opacity: 1; transform: translateX(0); } }
@keyframes float { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-20px); } }
@keyframes particle { 0%, 100% { transform: translateY(0); opacity: 0.3; } 50% { transform: translateY(-30px); opacity: 1; } }
@keyframes spin-slow { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
@keyframes scroll-hint { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(10px); } }
@keyframes glow-shift { 0%, 100% { background-position: 0% 50%; } 50% { background-position: 100% 50%; } }
@keyframes grow-x { from { transform: scaleX(0); } to { transform: scaleX(1); } }

.motion-fade-in { animation-name: motion-fade-in; animation-fill-mode: both; animation-duration: 500ms; }
.motion-fade-in-up { animation-name: motion-fade-in-up; animation-fill-mode: both; }
.motion-scale-in { animation-name: motion-scale-in; animation-fill-mode: both; }
.motion-slide-in-left { animation-name: motion-slide-in-left; animation-fill-mode: both; }
.motion-slide-in-right { animation-name: motion-slide-in-right; animation-fill-mode: both; }

.reveal { opacity: 0; animation-play-state: paused; }
.reveal.is-visible { opacity: 1; animation-play-state: running; }

.animate-float { animation: float 6s ease-in-out infinite; }
.animate-particle { animation-name: particle; animation-iteration-count: infinite; animation-timing-function: ease-in-out; }
.animate-spin-slow { animation: spin-slow 20s linear infinite; }
.animate-scroll-hint { animation: scroll-hint 2s ease-in-out infinite; }
.hero-glow { background-size: 200% 200%; animation: glow-shift 12s ease infinite; }

.brand-underline { width: 100%; transform-origin: left; animation: grow-x 800ms 500ms both; }
.skill-bar { transform-origin: left; transition: width 1500ms ease-out; }
.progress-bar { transform-origin: 0 50%; }
"#;
