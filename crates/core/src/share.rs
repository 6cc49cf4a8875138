//! Share and download buttons of the research-paper card.

use crate::notify::ToastSpec;

pub const SHARE_TITLE: &str = "AION-NEXUS: Unified Cognitive Architecture";
pub const SHARE_TEXT: &str =
    "A synthesis of OMEGA-SYNTHESIS, Σ-SEPA, DAEDALUS, Sigma-Matrix RCS, and ArcheTempus";

pub const PAPER_FILE_NAME: &str = "AION-NEXUS_Full_Paper.pdf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn for_page(url: impl Into<String>) -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: SHARE_TEXT.to_string(),
            url: url.into(),
        }
    }
}

/// Platform share capabilities. Both actions report only whether the request
/// could be issued.
pub trait ShareHost {
    fn can_share_natively(&self) -> bool;
    fn share_natively(&self, payload: &SharePayload) -> Result<(), String>;
    fn copy_to_clipboard(&self, text: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    LinkCopied,
    Failed(String),
}

impl ShareOutcome {
    pub fn toast(&self) -> ToastSpec {
        match self {
            ShareOutcome::Shared => ToastSpec::success("Shared!"),
            ShareOutcome::LinkCopied => ToastSpec::success("Link copied to clipboard!"),
            ShareOutcome::Failed(reason) => {
                ToastSpec::error("Could not share this page").with_description(reason.clone())
            }
        }
    }
}

/// Native share first; clipboard copy of the URL when that is missing or
/// refuses the request.
pub fn share_page(host: &dyn ShareHost, payload: &SharePayload) -> ShareOutcome {
    if host.can_share_natively() {
        match host.share_natively(payload) {
            Ok(()) => return ShareOutcome::Shared,
            Err(e) => tracing::debug!(error = %e, "native share failed; falling back to clipboard"),
        }
    }

    match host.copy_to_clipboard(&payload.url) {
        Ok(()) => ShareOutcome::LinkCopied,
        Err(e) => {
            tracing::warn!(error = %e, "clipboard unavailable");
            ShareOutcome::Failed(e)
        }
    }
}

/// Download stub: acknowledges the request without producing a file.
pub fn download_paper() -> ToastSpec {
    ToastSpec::success("Research paper download started!").with_description(PAPER_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastLevel;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeHost {
        native: bool,
        native_fails: bool,
        clipboard_fails: bool,
        copied: RefCell<Vec<String>>,
        shared: RefCell<Vec<SharePayload>>,
    }

    impl ShareHost for FakeHost {
        fn can_share_natively(&self) -> bool {
            self.native
        }

        fn share_natively(&self, payload: &SharePayload) -> Result<(), String> {
            if self.native_fails {
                return Err("NotAllowedError".into());
            }
            self.shared.borrow_mut().push(payload.clone());
            Ok(())
        }

        fn copy_to_clipboard(&self, text: &str) -> Result<(), String> {
            if self.clipboard_fails {
                return Err("no clipboard".into());
            }
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn payload() -> SharePayload {
        SharePayload::for_page("https://aion.example/#research")
    }

    #[test]
    fn native_share_preferred() {
        let host = FakeHost {
            native: true,
            ..Default::default()
        };
        assert_eq!(share_page(&host, &payload()), ShareOutcome::Shared);
        assert_eq!(host.shared.borrow()[0].title, SHARE_TITLE);
        assert!(host.copied.borrow().is_empty());
    }

    #[test]
    fn clipboard_fallback() {
        let host = FakeHost::default();
        let outcome = share_page(&host, &payload());
        assert_eq!(outcome, ShareOutcome::LinkCopied);
        assert_eq!(
            host.copied.borrow().as_slice(),
            &["https://aion.example/#research".to_string()]
        );
        assert_eq!(outcome.toast().message, "Link copied to clipboard!");

        let host = FakeHost {
            native: true,
            native_fails: true,
            ..Default::default()
        };
        assert_eq!(share_page(&host, &payload()), ShareOutcome::LinkCopied);
    }

    #[test]
    fn both_paths_unavailable() {
        let host = FakeHost {
            clipboard_fails: true,
            ..Default::default()
        };
        let outcome = share_page(&host, &payload());
        assert!(matches!(outcome, ShareOutcome::Failed(_)));
        assert_eq!(outcome.toast().level, ToastLevel::Error);
    }

    #[test]
    fn download_is_a_toast_only() {
        let t = download_paper();
        assert_eq!(t.level, ToastLevel::Success);
        assert_eq!(t.message, "Research paper download started!");
        assert_eq!(t.description.as_deref(), Some("AION-NEXUS_Full_Paper.pdf"));
    }
}
