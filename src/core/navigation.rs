//! Full-page navigation into the application
//!
//! Every call-to-action on the landing page leads to the same place. The
//! redirect goes through the [`Navigator`] trait so the browser side effect
//! stays at the edge and the rest can be exercised natively.

/// Relative location of the application entry point.
///
/// Resolved by the browser against the current document URL.
pub const APP_ENTRY: &str = "index.html";

/// Errors reported by a navigation host
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("No browsing context available")]
    NoWindow,

    #[error("Navigation to {href} rejected: {reason}")]
    Rejected { href: String, reason: String },
}

/// Host capable of replacing the current document.
pub trait Navigator {
    fn navigate(&self, href: &str) -> Result<(), NavigationError>;
}

/// Redirect the whole browsing context to [`APP_ENTRY`].
///
/// Failures are logged and otherwise dropped; there is no retry.
pub fn go_to_app<N: Navigator + ?Sized>(navigator: &N) {
    if let Err(e) = navigator.navigate(APP_ENTRY) {
        leptos::logging::warn!("Failed to open the app: {}", e);
    }
}

/// Navigator backed by `window.location`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    #[cfg(feature = "hydrate")]
    fn navigate(&self, href: &str) -> Result<(), NavigationError> {
        let window = web_sys::window().ok_or(NavigationError::NoWindow)?;
        window
            .location()
            .set_href(href)
            .map_err(|e| NavigationError::Rejected {
                href: href.to_string(),
                reason: format!("{:?}", e),
            })
    }

    #[cfg(not(feature = "hydrate"))]
    fn navigate(&self, _href: &str) -> Result<(), NavigationError> {
        // Server render: clicks never reach here
        Err(NavigationError::NoWindow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNavigator {
        requests: RefCell<Vec<String>>,
        fail: bool,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, href: &str) -> Result<(), NavigationError> {
            self.requests.borrow_mut().push(href.to_string());
            if self.fail {
                Err(NavigationError::Rejected {
                    href: href.to_string(),
                    reason: "blocked".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_go_to_app_requests_entry_once() {
        let nav = RecordingNavigator::default();
        go_to_app(&nav);
        assert_eq!(*nav.requests.borrow(), vec!["index.html".to_string()]);
    }

    #[test]
    fn test_each_invocation_is_one_request() {
        let nav = RecordingNavigator::default();
        // "Começar", "Login" and "Criar Conta" all share the same handler
        for _ in 0..3 {
            go_to_app(&nav);
        }
        let requests = nav.requests.borrow();
        assert_eq!(requests.len(), 3);
        assert!(requests.iter().all(|href| href == APP_ENTRY));
    }

    #[test]
    fn test_failed_navigation_is_swallowed() {
        let nav = RecordingNavigator {
            fail: true,
            ..Default::default()
        };
        go_to_app(&nav);
        assert_eq!(nav.requests.borrow().len(), 1);
    }

    #[test]
    fn test_go_to_app_through_trait_object() {
        let nav = RecordingNavigator::default();
        let dyn_nav: &dyn Navigator = &nav;
        go_to_app(dyn_nav);
        assert_eq!(nav.requests.borrow().as_slice(), ["index.html"]);
    }

    #[test]
    fn test_navigation_error_display() {
        let err = NavigationError::Rejected {
            href: "index.html".to_string(),
            reason: "SecurityError".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Navigation to index.html rejected: SecurityError"
        );
        assert_eq!(
            NavigationError::NoWindow.to_string(),
            "No browsing context available"
        );
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_browser_navigator_without_window() {
        assert!(matches!(
            BrowserNavigator.navigate(APP_ENTRY),
            Err(NavigationError::NoWindow)
        ));
    }
}
