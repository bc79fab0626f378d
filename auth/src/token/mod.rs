pub mod claims;
pub mod codec;
pub mod errors;

pub use claims::Claims;
pub use claims::TokenPayload;
pub use codec::TokenCodec;
pub use codec::TokenKind;
pub use codec::TokenPair;
pub use errors::TokenError;
