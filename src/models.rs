pub mod auth;
pub use auth::{Role, Usuario};
pub mod pessoa;
pub use pessoa::Pessoa;
pub mod imovel;
pub use imovel::{Imobiliaria, Imovel, ImovelStatus};
pub mod proposta;
pub use proposta::{Parte, Proposta, PropostaStatus};
pub mod contrato;
pub use contrato::{Contrato, ContratoStatus};
pub mod template;
pub use template::ContratoTemplate;
pub mod documento;
pub use documento::{Documento, DocumentoStatus, EntidadeTipo};
pub mod mensagem;
pub use mensagem::{AutorTipo, Mensagem};
pub mod frontend;
pub mod dashboard;
pub use dashboard::EstatisticasPainel;
