/// Native window backed by `minifb`.
#[cfg(feature = "window")]
pub mod window;
