// src/services/documento_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::api::DocumentosApi;
use crate::cache::{ttl, CacheConsultas, ChaveConsulta, Mutacao};
use crate::common::error::AppError;
use crate::models::documento::{Documento, EntidadeTipo, NovoDocumento, VerificarDocumento};

#[derive(Clone)]
pub struct DocumentoService {
    api: DocumentosApi,
    cache: CacheConsultas,
}

impl DocumentoService {
    pub fn novo(api: DocumentosApi, cache: CacheConsultas) -> Self {
        Self { api, cache }
    }

    pub async fn listar_por_entidade(
        &self,
        entidade_tipo: EntidadeTipo,
        entidade_id: Uuid,
    ) -> Result<Vec<Documento>, AppError> {
        let chave = ChaveConsulta::nova([
            "documentos".to_string(),
            entidade_tipo.as_str().to_string(),
            entidade_id.to_string(),
        ]);
        let api = self.api.clone();
        self.cache
            .obter_ou_buscar(chave, ttl::PADRAO, move || {
                let api = api.clone();
                async move { api.listar_por_entidade(entidade_tipo, entidade_id).await }
            })
            .await
    }

    pub async fn buscar(&self, id: Uuid) -> Result<Documento, AppError> {
        self.api.buscar(id).await
    }

    pub async fn criar(&self, dados: &NovoDocumento) -> Result<Documento, AppError> {
        dados.validate()?;
        let documento = self.api.criar(dados).await?;
        self.cache.invalidar_mutacao(Mutacao::CriarDocumento).await;
        Ok(documento)
    }

    /// Marca o documento como verificado/aprovado/rejeitado, com
    /// observações opcionais do verificador.
    pub async fn verificar(
        &self,
        id: Uuid,
        dados: &VerificarDocumento,
    ) -> Result<Documento, AppError> {
        let documento = self.api.verificar(id, dados).await?;
        self.cache
            .invalidar_mutacao(Mutacao::VerificarDocumento)
            .await;
        Ok(documento)
    }
}
