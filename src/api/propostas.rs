// src/api/propostas.rs

use uuid::Uuid;

use crate::api::client::{query_de, ApiClient};
use crate::common::error::AppError;
use crate::models::frontend::FiltroPropostas;
use crate::models::proposta::{AtualizarProposta, NovaProposta, Proposta};

#[derive(Clone)]
pub struct PropostasApi {
    client: ApiClient,
}

impl PropostasApi {
    pub fn nova(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn listar(&self, filtro: Option<&FiltroPropostas>) -> Result<Vec<Proposta>, AppError> {
        let query = filtro.map(query_de).unwrap_or_default();
        self.client.get_lista("/propostas", query).await
    }

    pub async fn buscar(&self, id: Uuid) -> Result<Proposta, AppError> {
        self.client.get(&format!("/propostas/{}", id), Vec::new()).await
    }

    pub async fn criar(&self, dados: &NovaProposta) -> Result<Proposta, AppError> {
        self.client
            .post("/propostas", Some(serde_json::to_value(dados)?))
            .await
    }

    pub async fn atualizar(&self, id: Uuid, dados: &AtualizarProposta) -> Result<Proposta, AppError> {
        self.client
            .put(&format!("/propostas/{}", id), serde_json::to_value(dados)?)
            .await
    }

    pub async fn enviar(&self, id: Uuid) -> Result<Proposta, AppError> {
        self.client
            .post(&format!("/propostas/{}/enviar", id), None)
            .await
    }

    pub async fn aprovar_comprador(&self, id: Uuid) -> Result<Proposta, AppError> {
        self.client
            .post(&format!("/propostas/{}/aprovar-comprador", id), None)
            .await
    }

    pub async fn aprovar_vendedor(&self, id: Uuid) -> Result<Proposta, AppError> {
        self.client
            .post(&format!("/propostas/{}/aprovar-vendedor", id), None)
            .await
    }
}
