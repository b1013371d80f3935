pub(crate) const NAV_LINKS_SELECTOR: &str = ".nav-links a";
pub(crate) const NAV_LOGIN_LINK_SELECTOR: &str = ".nav-links a[href=\"login.html\"]";
pub(crate) const REVEAL_SELECTOR: &str = ".fade-up:not(.visible)";

pub(crate) const THEME_TOGGLE_ID: &str = "theme-toggle";

pub(crate) const SIGNOUT_MODAL_ID: &str = "signout-confirm-modal";
pub(crate) const SIGNOUT_CANCEL_ID: &str = "signout-cancel-btn";
pub(crate) const SIGNOUT_CONFIRM_ID: &str = "signout-confirm-btn";
pub(crate) const LOGOUT_BUTTON_ID: &str = "logout-btn";

pub(crate) const DETAIL_MODAL_ID: &str = "itinerary-modal";
pub(crate) const DETAIL_TITLE_ID: &str = "modal-title";
pub(crate) const DETAIL_META_ID: &str = "modal-meta";
pub(crate) const DETAIL_BODY_ID: &str = "modal-details";
pub(crate) const DETAIL_IMAGE_ID: &str = "modal-image";
pub(crate) const DETAIL_CLOSE_ID: &str = "modal-close";

pub(crate) const EXPLORE_GRID_ID: &str = "explore-grid";
pub(crate) const EXPLORE_MESSAGE_ID: &str = "explore-msg";
pub(crate) const EXPLORE_SEARCH_ID: &str = "explore-search";
pub(crate) const EXPLORE_REGION_ID: &str = "explore-region";
pub(crate) const EXPLORE_APPLY_ID: &str = "explore-filter-btn";

pub(crate) const LOGIN_FORM_ID: &str = "login-form";
pub(crate) const REGISTER_FORM_ID: &str = "register-form";
pub(crate) const LOGIN_PANEL_ID: &str = "auth-login-panel";
pub(crate) const REGISTER_PANEL_ID: &str = "auth-register-panel";
pub(crate) const LOGIN_TAB_ID: &str = "auth-tab-login";
pub(crate) const REGISTER_TAB_ID: &str = "auth-tab-register";
pub(crate) const SHOW_REGISTER_LINK_ID: &str = "show-register-link";
pub(crate) const SHOW_LOGIN_LINK_ID: &str = "show-login-link";
pub(crate) const LOGIN_MESSAGE_ID: &str = "login-msg";
pub(crate) const REGISTER_MESSAGE_ID: &str = "register-msg";
pub(crate) const LOGIN_SUBMIT_ID: &str = "login-submit-btn";
pub(crate) const REGISTER_SUBMIT_ID: &str = "register-submit-btn";
pub(crate) const LOGIN_EMAIL_ID: &str = "login-email";
pub(crate) const LOGIN_PASSWORD_ID: &str = "login-password";
pub(crate) const REGISTER_NAME_ID: &str = "register-name";
pub(crate) const REGISTER_EMAIL_ID: &str = "register-email";
pub(crate) const REGISTER_PASSWORD_ID: &str = "register-password";
pub(crate) const TAB_ACTIVE_CLASS: &str = "is-active";

pub(crate) const SESSION_INFO_ID: &str = "session-info";
pub(crate) const ADMIN_MESSAGE_ID: &str = "admin-msg";
pub(crate) const ITINERARY_FORM_ID: &str = "itinerary-form";
pub(crate) const OWN_ITINERARIES_BODY_ID: &str = "my-itineraries-body";
pub(crate) const REVIEW_SECTION_ID: &str = "admin-review-section";
pub(crate) const REVIEW_BODY_ID: &str = "review-body";
pub(crate) const FORM_TITLE_ID: &str = "it-title";
pub(crate) const FORM_REGION_ID: &str = "it-region";
pub(crate) const FORM_DURATION_ID: &str = "it-duration";
pub(crate) const FORM_BUDGET_MIN_ID: &str = "it-budget-min";
pub(crate) const FORM_BUDGET_MAX_ID: &str = "it-budget-max";
pub(crate) const FORM_IMAGE_ID: &str = "it-image";
pub(crate) const FORM_DETAILS_ID: &str = "it-details";
