// src/application/ports/util.rs
pub trait TokenGenerator: Send + Sync {
    /// Opaque, URL-safe random token.
    fn generate(&self) -> String;
}
