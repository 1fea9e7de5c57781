// src/services/imovel_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::api::client::Pagina;
use crate::api::{FrontendApi, ImoveisApi};
use crate::cache::{segmento_de_filtro, ttl, CacheConsultas, ChaveConsulta, Mutacao};
use crate::common::error::AppError;
use crate::models::frontend::{FiltroImoveis, ImobiliariaCompleta, ImovelCompleto};
use crate::models::imovel::{AtualizarImovel, Imovel, NovoImovel};

#[derive(Clone)]
pub struct ImovelService {
    api: ImoveisApi,
    frontend: FrontendApi,
    cache: CacheConsultas,
}

impl ImovelService {
    pub fn novo(api: ImoveisApi, frontend: FrontendApi, cache: CacheConsultas) -> Self {
        Self {
            api,
            frontend,
            cache,
        }
    }

    // --- Leituras ---

    pub async fn listar(&self, filtro: Option<&FiltroImoveis>) -> Result<Vec<Imovel>, AppError> {
        let chave = ChaveConsulta::nova(["imoveis".to_string(), segmento_de_filtro(filtro)]);
        let api = self.api.clone();
        let filtro = filtro.cloned();
        self.cache
            .obter_ou_buscar(chave, ttl::PADRAO, move || {
                let api = api.clone();
                let filtro = filtro.clone();
                async move { api.listar(filtro.as_ref()).await }
            })
            .await
    }

    pub async fn buscar(&self, id: Uuid) -> Result<Imovel, AppError> {
        let chave = ChaveConsulta::nova(["imoveis".to_string(), id.to_string()]);
        let api = self.api.clone();
        self.cache
            .obter_ou_buscar(chave, ttl::PADRAO, move || {
                let api = api.clone();
                async move { api.buscar(id).await }
            })
            .await
    }

    pub async fn meus(
        &self,
        filtro: Option<&FiltroImoveis>,
    ) -> Result<Pagina<ImovelCompleto>, AppError> {
        let chave = ChaveConsulta::nova([
            "frontend".to_string(),
            "meus-imoveis".to_string(),
            segmento_de_filtro(filtro),
        ]);
        let api = self.frontend.clone();
        let filtro = filtro.cloned();
        self.cache
            .obter_ou_buscar(chave, ttl::MEUS_IMOVEIS, move || {
                let api = api.clone();
                let filtro = filtro.clone();
                async move { api.meus_imoveis(filtro.as_ref()).await }
            })
            .await
    }

    /// Imobiliária do usuário logado. Janela de cache longa: muda pouco.
    pub async fn minha_imobiliaria(&self) -> Result<Option<ImobiliariaCompleta>, AppError> {
        let chave = ChaveConsulta::nova(["frontend".to_string(), "minha-imobiliaria".to_string()]);
        let api = self.frontend.clone();
        self.cache
            .obter_ou_buscar(chave, ttl::MINHA_IMOBILIARIA, move || {
                let api = api.clone();
                async move { api.minha_imobiliaria().await }
            })
            .await
    }

    // --- Mutações ---

    pub async fn criar(&self, dados: &NovoImovel) -> Result<Imovel, AppError> {
        dados.validate()?;
        let imovel = self.api.criar(dados).await?;
        self.cache.invalidar_mutacao(Mutacao::CriarImovel).await;
        tracing::info!("Imóvel {} cadastrado", imovel.id);
        Ok(imovel)
    }

    pub async fn atualizar(&self, id: Uuid, dados: &AtualizarImovel) -> Result<Imovel, AppError> {
        let imovel = self.api.atualizar(id, dados).await?;
        self.cache.invalidar_mutacao(Mutacao::AtualizarImovel).await;
        Ok(imovel)
    }

    pub async fn deletar(&self, id: Uuid) -> Result<(), AppError> {
        self.api.deletar(id).await?;
        self.cache.invalidar_mutacao(Mutacao::DeletarImovel).await;
        Ok(())
    }
}
