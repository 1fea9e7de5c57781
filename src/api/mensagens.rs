// src/api/mensagens.rs

use uuid::Uuid;

use crate::api::client::ApiClient;
use crate::common::error::AppError;
use crate::models::mensagem::{AtualizarMensagem, Mensagem, NovaMensagem};

#[derive(Clone)]
pub struct MensagensApi {
    client: ApiClient,
}

impl MensagensApi {
    pub fn nova(client: ApiClient) -> Self {
        Self { client }
    }

    /// Mensagens de um contrato, na ordem devolvida pelo servidor
    /// (criação ascendente).
    pub async fn listar_por_contrato(
        &self,
        contrato_id: Uuid,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Vec<Mensagem>, AppError> {
        let mut query = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = offset {
            query.push(("offset".to_string(), offset.to_string()));
        }
        self.client
            .get_lista(&format!("/mensagens/contrato/{}", contrato_id), query)
            .await
    }

    pub async fn buscar(&self, id: Uuid) -> Result<Mensagem, AppError> {
        self.client.get(&format!("/mensagens/{}", id), Vec::new()).await
    }

    pub async fn recentes(&self, limit: Option<u32>) -> Result<Vec<Mensagem>, AppError> {
        let query = limit
            .map(|l| vec![("limit".to_string(), l.to_string())])
            .unwrap_or_default();
        self.client.get_lista("/mensagens/recentes", query).await
    }

    pub async fn criar(&self, dados: &NovaMensagem) -> Result<Mensagem, AppError> {
        self.client
            .post("/mensagens", Some(serde_json::to_value(dados)?))
            .await
    }

    pub async fn atualizar(
        &self,
        id: Uuid,
        dados: &AtualizarMensagem,
    ) -> Result<Mensagem, AppError> {
        self.client
            .put(&format!("/mensagens/{}", id), serde_json::to_value(dados)?)
            .await
    }

    pub async fn adicionar_anexo(&self, id: Uuid, anexo_url: &str) -> Result<Mensagem, AppError> {
        self.client
            .post(
                &format!("/mensagens/{}/anexo", id),
                Some(serde_json::json!({ "anexo_url": anexo_url })),
            )
            .await
    }

    pub async fn deletar(&self, id: Uuid) -> Result<(), AppError> {
        self.client.delete(&format!("/mensagens/{}", id)).await
    }
}
