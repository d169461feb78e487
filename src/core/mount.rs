//! Mount point lookup guard

/// Id of the container element the page is rendered into.
pub const ROOT_ID: &str = "root";

/// Result of trying to attach the app to the host document
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountOutcome {
    Mounted,
    /// The container was missing; nothing was rendered
    NoContainer,
}

/// Run `mount` only if the container was found.
///
/// A missing container is not an error: the page silently stays empty.
pub fn mount_into<T, F>(container: Option<T>, mount: F) -> MountOutcome
where
    F: FnOnce(T),
{
    match container {
        Some(container) => {
            mount(container);
            MountOutcome::Mounted
        }
        None => MountOutcome::NoContainer,
    }
}
