// src/services/proposta_service.rs

use uuid::Uuid;
use validator::Validate;

use crate::api::client::Pagina;
use crate::api::{FrontendApi, PropostasApi};
use crate::cache::{segmento_de_filtro, ttl, CacheConsultas, ChaveConsulta, Mutacao};
use crate::common::error::AppError;
use crate::models::frontend::{FiltroPropostas, PropostaCompleta};
use crate::models::proposta::{AtualizarProposta, NovaProposta, Parte, Proposta};

#[derive(Clone)]
pub struct PropostaService {
    api: PropostasApi,
    frontend: FrontendApi,
    cache: CacheConsultas,
}

impl PropostaService {
    pub fn novo(api: PropostasApi, frontend: FrontendApi, cache: CacheConsultas) -> Self {
        Self {
            api,
            frontend,
            cache,
        }
    }

    // --- Leituras (passam pelo cache) ---

    pub async fn listar(
        &self,
        filtro: Option<&FiltroPropostas>,
    ) -> Result<Vec<Proposta>, AppError> {
        let chave = ChaveConsulta::nova(["propostas".to_string(), segmento_de_filtro(filtro)]);
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

    pub async fn buscar(&self, id: Uuid) -> Result<Proposta, AppError> {
        let chave = ChaveConsulta::nova(["propostas".to_string(), id.to_string()]);
        let api = self.api.clone();
        self.cache
            .obter_ou_buscar(chave, ttl::PADRAO, move || {
                let api = api.clone();
                async move { api.buscar(id).await }
            })
            .await
    }

    /// Propostas do usuário logado, com imóvel e partes expandidos.
    pub async fn minhas(
        &self,
        filtro: Option<&FiltroPropostas>,
    ) -> Result<Pagina<PropostaCompleta>, AppError> {
        let chave = ChaveConsulta::nova([
            "frontend".to_string(),
            "minhas-propostas".to_string(),
            segmento_de_filtro(filtro),
        ]);
        let api = self.frontend.clone();
        let filtro = filtro.cloned();
        self.cache
            .obter_ou_buscar(chave, ttl::MINHAS_PROPOSTAS, move || {
                let api = api.clone();
                let filtro = filtro.clone();
                async move { api.minhas_propostas(filtro.as_ref()).await }
            })
            .await
    }

    // --- Mutações (invalidam via tabela, somente após sucesso) ---

    pub async fn criar(&self, dados: &NovaProposta) -> Result<Proposta, AppError> {
        dados.validate()?;
        let proposta = self.api.criar(dados).await?;
        self.cache.invalidar_mutacao(Mutacao::CriarProposta).await;
        tracing::info!("Proposta {} criada em rascunho", proposta.id);
        Ok(proposta)
    }

    pub async fn atualizar(
        &self,
        id: Uuid,
        dados: &AtualizarProposta,
    ) -> Result<Proposta, AppError> {
        let proposta = self.api.atualizar(id, dados).await?;
        self.cache
            .invalidar_mutacao(Mutacao::AtualizarProposta)
            .await;
        Ok(proposta)
    }

    /// Envia o rascunho para as partes. O guard local só decide se a ação
    /// é oferecida; o servidor revalida.
    pub async fn enviar(&self, proposta: &Proposta) -> Result<Proposta, AppError> {
        if !proposta.pode_enviar() {
            return Err(AppError::RegraDeNegocio(
                "Apenas propostas em rascunho podem ser enviadas.".to_string(),
            ));
        }
        let atualizada = self.api.enviar(proposta.id).await?;
        self.cache.invalidar_mutacao(Mutacao::EnviarProposta).await;
        tracing::info!("Proposta {} enviada", atualizada.id);
        Ok(atualizada)
    }

    /// Aprova em nome de uma das partes. A transição conjunta para
    /// `aprovada` vem no retorno do servidor, nunca é calculada aqui.
    pub async fn aprovar(&self, proposta: &Proposta, parte: Parte) -> Result<Proposta, AppError> {
        if !proposta.pode_aprovar(parte) {
            return Err(AppError::RegraDeNegocio(
                "Esta parte não pode aprovar a proposta neste estado.".to_string(),
            ));
        }
        let atualizada = match parte {
            Parte::Comprador => self.api.aprovar_comprador(proposta.id).await?,
            Parte::Vendedor => self.api.aprovar_vendedor(proposta.id).await?,
            // O guard acima já barrou; propostas não têm aprovação da
            // imobiliária.
            Parte::Imobiliaria => {
                return Err(AppError::RegraDeNegocio(
                    "A imobiliária não aprova propostas.".to_string(),
                ))
            }
        };
        self.cache.invalidar_mutacao(Mutacao::AprovarProposta).await;
        tracing::info!(
            "Proposta {} aprovada pelo {} (status atual: {:?})",
            atualizada.id,
            parte.as_str(),
            atualizada.status
        );
        Ok(atualizada)
    }
}
