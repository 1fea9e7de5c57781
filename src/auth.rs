pub mod session;
pub use session::{Sessao, SessaoStore, UsuarioProvedor};
pub mod client;
pub use client::AuthClient;
