// src/api/templates.rs

use uuid::Uuid;

use crate::api::client::ApiClient;
use crate::common::error::AppError;
use crate::models::template::{AtualizarTemplate, ContratoTemplate, NovoTemplate};

#[derive(Clone)]
pub struct TemplatesApi {
    client: ApiClient,
}

impl TemplatesApi {
    pub fn nova(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn listar(&self) -> Result<Vec<ContratoTemplate>, AppError> {
        self.client.get_lista("/contrato-templates", Vec::new()).await
    }

    pub async fn listar_por_imobiliaria(
        &self,
        imobiliaria_id: Uuid,
        apenas_ativos: bool,
    ) -> Result<Vec<ContratoTemplate>, AppError> {
        let query = vec![("apenas_ativos".to_string(), apenas_ativos.to_string())];
        self.client
            .get_lista(
                &format!("/contrato-templates/imobiliaria/{}", imobiliaria_id),
                query,
            )
            .await
    }

    /// Template em uso pela imobiliária (no máximo um ativo por vez).
    pub async fn buscar_ativo(&self, imobiliaria_id: Uuid) -> Result<ContratoTemplate, AppError> {
        self.client
            .get(
                &format!("/contrato-templates/imobiliaria/{}/ativo", imobiliaria_id),
                Vec::new(),
            )
            .await
    }

    pub async fn buscar(&self, id: Uuid) -> Result<ContratoTemplate, AppError> {
        self.client
            .get(&format!("/contrato-templates/{}", id), Vec::new())
            .await
    }

    pub async fn criar(&self, dados: &NovoTemplate) -> Result<ContratoTemplate, AppError> {
        self.client
            .post("/contrato-templates", Some(serde_json::to_value(dados)?))
            .await
    }

    pub async fn atualizar(
        &self,
        id: Uuid,
        dados: &AtualizarTemplate,
    ) -> Result<ContratoTemplate, AppError> {
        self.client
            .put(
                &format!("/contrato-templates/{}", id),
                serde_json::to_value(dados)?,
            )
            .await
    }

    pub async fn ativar(&self, id: Uuid) -> Result<ContratoTemplate, AppError> {
        self.client
            .post(&format!("/contrato-templates/{}/ativar", id), None)
            .await
    }

    pub async fn desativar(&self, id: Uuid) -> Result<ContratoTemplate, AppError> {
        self.client
            .post(&format!("/contrato-templates/{}/desativar", id), None)
            .await
    }

    pub async fn deletar(&self, id: Uuid) -> Result<(), AppError> {
        self.client
            .delete(&format!("/contrato-templates/{}", id))
            .await
    }
}
