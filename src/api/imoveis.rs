// src/api/imoveis.rs
//
// O recurso de imóveis vive em `/properties` na API (nome herdado do
// backend); o resto do cliente fala "imóveis".

use uuid::Uuid;

use crate::api::client::{query_de, ApiClient};
use crate::common::error::AppError;
use crate::models::frontend::FiltroImoveis;
use crate::models::imovel::{AtualizarImovel, Imovel, NovoImovel};

#[derive(Clone)]
pub struct ImoveisApi {
    client: ApiClient,
}

impl ImoveisApi {
    pub fn nova(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn listar(&self, filtro: Option<&FiltroImoveis>) -> Result<Vec<Imovel>, AppError> {
        let query = filtro.map(query_de).unwrap_or_default();
        self.client.get_lista("/properties", query).await
    }

    pub async fn buscar(&self, id: Uuid) -> Result<Imovel, AppError> {
        self.client.get(&format!("/properties/{}", id), Vec::new()).await
    }

    pub async fn criar(&self, dados: &NovoImovel) -> Result<Imovel, AppError> {
        self.client
            .post("/properties", Some(serde_json::to_value(dados)?))
            .await
    }

    pub async fn atualizar(&self, id: Uuid, dados: &AtualizarImovel) -> Result<Imovel, AppError> {
        self.client
            .put(&format!("/properties/{}", id), serde_json::to_value(dados)?)
            .await
    }

    pub async fn deletar(&self, id: Uuid) -> Result<(), AppError> {
        self.client.delete(&format!("/properties/{}", id)).await
    }
}
