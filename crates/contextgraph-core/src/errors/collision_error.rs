/// Collision decoding and classification errors.
#[derive(Debug, thiserror::Error)]
pub enum CollisionError {
    #[error("unknown collision kind: {kind}")]
    UnknownKind { kind: String },
}
