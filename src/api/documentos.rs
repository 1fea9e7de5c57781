// src/api/documentos.rs

use uuid::Uuid;

use crate::api::client::ApiClient;
use crate::common::error::AppError;
use crate::models::documento::{Documento, EntidadeTipo, NovoDocumento, VerificarDocumento};

#[derive(Clone)]
pub struct DocumentosApi {
    client: ApiClient,
}

impl DocumentosApi {
    pub fn nova(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn listar_por_entidade(
        &self,
        entidade_tipo: EntidadeTipo,
        entidade_id: Uuid,
    ) -> Result<Vec<Documento>, AppError> {
        self.client
            .get_lista(
                &format!("/documentos/{}/{}", entidade_tipo.as_str(), entidade_id),
                Vec::new(),
            )
            .await
    }

    pub async fn buscar(&self, id: Uuid) -> Result<Documento, AppError> {
        self.client.get(&format!("/documentos/{}", id), Vec::new()).await
    }

    pub async fn criar(&self, dados: &NovoDocumento) -> Result<Documento, AppError> {
        self.client
            .post("/documentos", Some(serde_json::to_value(dados)?))
            .await
    }

    pub async fn atualizar(
        &self,
        id: Uuid,
        dados: &serde_json::Value,
    ) -> Result<Documento, AppError> {
        self.client
            .put(&format!("/documentos/{}", id), dados.clone())
            .await
    }

    pub async fn verificar(
        &self,
        id: Uuid,
        dados: &VerificarDocumento,
    ) -> Result<Documento, AppError> {
        self.client
            .post(
                &format!("/documentos/{}/verificar", id),
                Some(serde_json::to_value(dados)?),
            )
            .await
    }
}
