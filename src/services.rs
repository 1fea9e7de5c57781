pub mod proposta_service;
pub use proposta_service::PropostaService;
pub mod contrato_service;
pub use contrato_service::ContratoService;
pub mod imovel_service;
pub use imovel_service::ImovelService;
pub mod documento_service;
pub use documento_service::DocumentoService;
pub mod mensagem_service;
pub use mensagem_service::MensagemService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
