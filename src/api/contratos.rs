// src/api/contratos.rs

use uuid::Uuid;

use crate::api::client::{query_de, ApiClient};
use crate::common::error::AppError;
use crate::models::contrato::{
    AprovarContrato, AssinarContrato, Contrato, GerarContrato, PendenciasContrato,
};
use crate::models::frontend::FiltroContratos;
use crate::models::proposta::Parte;

#[derive(Clone)]
pub struct ContratosApi {
    client: ApiClient,
}

impl ContratosApi {
    pub fn nova(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn listar(&self, filtro: Option<&FiltroContratos>) -> Result<Vec<Contrato>, AppError> {
        let query = filtro.map(query_de).unwrap_or_default();
        self.client.get_lista("/contratos", query).await
    }

    pub async fn buscar(&self, id: Uuid) -> Result<Contrato, AppError> {
        self.client.get(&format!("/contratos/{}", id), Vec::new()).await
    }

    // A geração em si (IA ou template) acontece no servidor; daqui só sai
    // o id da proposta aprovada.
    pub async fn gerar(&self, proposta_id: Uuid) -> Result<Contrato, AppError> {
        let corpo = serde_json::to_value(GerarContrato { proposta_id })?;
        self.client.post("/contratos/gerar", Some(corpo)).await
    }

    pub async fn aprovar(&self, id: Uuid, parte: Parte) -> Result<Contrato, AppError> {
        let corpo = serde_json::to_value(AprovarContrato { parte })?;
        self.client
            .post(&format!("/contratos/{}/aprovar", id), Some(corpo))
            .await
    }

    pub async fn assinar(
        &self,
        id: Uuid,
        parte: Parte,
        arquivo_url: Option<String>,
    ) -> Result<Contrato, AppError> {
        let corpo = serde_json::to_value(AssinarContrato { parte, arquivo_url })?;
        self.client
            .post(&format!("/contratos/{}/assinar", id), Some(corpo))
            .await
    }

    pub async fn verificar_pendencias(
        &self,
        proposta_id: Uuid,
    ) -> Result<PendenciasContrato, AppError> {
        self.client
            .get(
                &format!("/contratos/proposta/{}/pendencias", proposta_id),
                Vec::new(),
            )
            .await
    }
}
