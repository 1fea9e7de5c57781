use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Cobre a taxonomia inteira do cliente: transporte, autenticação (401),
// rejeição de regra de negócio (4xx com mensagem), validação local e
// respostas fora do formato esperado.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Falha de comunicação com a API")]
    Transporte(#[from] reqwest::Error),

    // 401 da API ou do provedor de identidade. Quem recebe este erro já
    // encontra a sessão local encerrada (o gateway a limpa antes de retornar).
    #[error("Sessão expirada ou inválida")]
    SessaoExpirada,

    #[error("Nenhuma sessão ativa")]
    SemSessao,

    // 4xx com payload { "error": "..." }; a mensagem vem do servidor.
    #[error("{0}")]
    RegraDeNegocio(String),

    #[error("Recurso não encontrado")]
    NaoEncontrado,

    #[error("Erro de validação")]
    Validacao(#[from] validator::ValidationErrors),

    // O corpo retornado não tem o formato do envelope esperado.
    #[error("Resposta inesperada da API")]
    RespostaInvalida(#[from] serde_json::Error),

    // Variante genérica para qualquer outro erro inesperado
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno")]
    Interno(#[from] anyhow::Error),
}

impl AppError {
    /// Mensagem pronta para exibir em uma notificação ao usuário.
    /// Usa a mensagem do servidor quando disponível, senão um texto genérico.
    pub fn mensagem_para_usuario(&self) -> String {
        match self {
            AppError::RegraDeNegocio(msg) => msg.clone(),
            AppError::SessaoExpirada => "Sua sessão expirou. Faça login novamente.".to_string(),
            AppError::SemSessao => "Faça login para continuar.".to_string(),
            AppError::NaoEncontrado => "Recurso não encontrado.".to_string(),
            AppError::Validacao(errors) => {
                let detalhes: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(_, field_errors)| {
                        field_errors
                            .iter()
                            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                    })
                    .collect();
                if detalhes.is_empty() {
                    "Um ou mais campos são inválidos.".to_string()
                } else {
                    detalhes.join(" ")
                }
            }
            // Transporte, RespostaInvalida, Interno: o detalhe vai para o log,
            // o usuário recebe o texto genérico.
            ref e => {
                tracing::error!("Erro inesperado no cliente: {}", e);
                "Ocorreu um erro inesperado. Tente novamente.".to_string()
            }
        }
    }

    /// Indica se a falha deve derrubar o usuário para a tela de login.
    pub fn encerra_sessao(&self) -> bool {
        matches!(self, AppError::SessaoExpirada | AppError::SemSessao)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mensagem_de_regra_de_negocio_vem_do_servidor() {
        let err = AppError::RegraDeNegocio("Proposta já foi enviada.".to_string());
        assert_eq!(err.mensagem_para_usuario(), "Proposta já foi enviada.");
    }

    #[test]
    fn sessao_expirada_derruba_para_login() {
        assert!(AppError::SessaoExpirada.encerra_sessao());
        assert!(!AppError::NaoEncontrado.encerra_sessao());
    }
}
