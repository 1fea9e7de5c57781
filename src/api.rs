pub mod client;
pub use client::{ApiClient, ApiRequisicao, ApiTransport, HttpTransport, Metodo, Pagina, RespostaBruta};
pub mod propostas;
pub use propostas::PropostasApi;
pub mod contratos;
pub use contratos::ContratosApi;
pub mod templates;
pub use templates::TemplatesApi;
pub mod imoveis;
pub use imoveis::ImoveisApi;
pub mod documentos;
pub use documentos::DocumentosApi;
pub mod mensagens;
pub use mensagens::MensagensApi;
pub mod frontend;
pub use frontend::FrontendApi;

#[cfg(test)]
pub mod test_support;
