// src/services/mensagem_service.rs
//
// Chat do contrato. Lista append-only do ponto de vista do cliente: sem
// inserção otimista, a lista só muda depois que o round trip dá certo e o
// cache é invalidado. A ordem é a devolvida pelo servidor.

use uuid::Uuid;
use validator::Validate;

use crate::api::MensagensApi;
use crate::cache::{ttl, CacheConsultas, ChaveConsulta, Mutacao};
use crate::common::error::AppError;
use crate::models::mensagem::{AtualizarMensagem, Mensagem, NovaMensagem};

#[derive(Clone)]
pub struct MensagemService {
    api: MensagensApi,
    cache: CacheConsultas,
}

impl MensagemService {
    pub fn novo(api: MensagensApi, cache: CacheConsultas) -> Self {
        Self { api, cache }
    }

    pub async fn por_contrato(
        &self,
        contrato_id: Uuid,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<Mensagem>, AppError> {
        let chave = ChaveConsulta::nova([
            "mensagens".to_string(),
            "contrato".to_string(),
            contrato_id.to_string(),
            format!("{:?}-{:?}", limit, offset),
        ]);
        let api = self.api.clone();
        self.cache
            .obter_ou_buscar(chave, ttl::PADRAO, move || {
                let api = api.clone();
                async move { api.listar_por_contrato(contrato_id, limit, offset).await }
            })
            .await
    }

    pub async fn recentes(&self, limit: Option<u32>) -> Result<Vec<Mensagem>, AppError> {
        let chave = ChaveConsulta::nova([
            "mensagens".to_string(),
            "recentes".to_string(),
            format!("{:?}", limit),
        ]);
        let api = self.api.clone();
        self.cache
            .obter_ou_buscar(chave, ttl::PADRAO, move || {
                let api = api.clone();
                async move { api.recentes(limit).await }
            })
            .await
    }

    pub async fn enviar(&self, dados: &NovaMensagem) -> Result<Mensagem, AppError> {
        dados.validate()?;
        let mensagem = self.api.criar(dados).await?;
        self.cache.invalidar_mutacao(Mutacao::EnviarMensagem).await;
        Ok(mensagem)
    }

    pub async fn atualizar(
        &self,
        id: Uuid,
        dados: &AtualizarMensagem,
    ) -> Result<Mensagem, AppError> {
        let mensagem = self.api.atualizar(id, dados).await?;
        self.cache
            .invalidar_mutacao(Mutacao::AtualizarMensagem)
            .await;
        Ok(mensagem)
    }

    pub async fn adicionar_anexo(&self, id: Uuid, anexo_url: &str) -> Result<Mensagem, AppError> {
        let mensagem = self.api.adicionar_anexo(id, anexo_url).await?;
        self.cache
            .invalidar_mutacao(Mutacao::AdicionarAnexoMensagem)
            .await;
        Ok(mensagem)
    }

    pub async fn deletar(&self, id: Uuid) -> Result<(), AppError> {
        self.api.deletar(id).await?;
        self.cache.invalidar_mutacao(Mutacao::DeletarMensagem).await;
        Ok(())
    }
}
