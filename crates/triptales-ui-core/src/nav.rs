pub const DEFAULT_PAGE: &str = "index.html";
pub const LOGIN_PAGE: &str = "login.html";
pub const ACTIVE_CLASS: &str = "active";
pub const SIGN_OUT_LABEL: &str = "Sign out";

pub const MODAL_OPEN_CLASS: &str = "is-open";
pub const HIDDEN_CLASS: &str = "hidden";
pub const SCROLL_LOCK_CLASS: &str = "overflow-hidden";
pub const MODAL_BACKDROP_CLASS: &str = "modal-backdrop";

/// Sign-out confirmation dialog, injected when a page does not ship one.
pub const SIGNOUT_MODAL_CLASS: &str =
    "confirm-modal fixed inset-0 z-50 hidden flex items-center justify-center p-4";
pub const SIGNOUT_MODAL_HTML: &str = r#"<div class="modal-backdrop absolute inset-0 bg-slate-900/55 backdrop-blur-sm"></div>
<div class="modal-panel relative z-10 w-full max-w-md rounded-3xl bg-white p-6 shadow-2xl shadow-slate-900/30">
  <h3 class="display-font text-2xl text-slate-900">Sign out?</h3>
  <p class="mt-3 text-sm text-slate-600">You will be signed out of your current session.</p>
  <div class="mt-6 flex justify-end gap-3">
    <button id="signout-cancel-btn" class="rounded-full border border-slate-200 px-4 py-2 text-sm font-semibold text-slate-700">Cancel</button>
    <button id="signout-confirm-btn" class="rounded-full bg-slate-900 px-4 py-2 text-sm font-semibold text-white">Sign out</button>
  </div>
</div>"#;

pub const REVEAL_CLASS: &str = "fade-up";
pub const REVEAL_VISIBLE_CLASS: &str = "visible";
pub const REVEAL_THRESHOLD: f64 = 0.18;

/// Last path segment of `pathname`, or `index.html` when it is empty.
#[must_use]
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => DEFAULT_PAGE,
    }
}

#[must_use]
pub fn is_active_link(href: &str, pathname: &str) -> bool {
    !href.is_empty() && href.contains(current_page(pathname))
}
