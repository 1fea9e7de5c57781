// src/config.rs

use std::env;

use crate::api::client::{ApiClient, HttpTransport};
use crate::api::{
    ContratosApi, DocumentosApi, FrontendApi, ImoveisApi, MensagensApi, PropostasApi, TemplatesApi,
};
use crate::auth::client::AuthClient;
use crate::auth::session::SessaoStore;
use crate::cache::CacheConsultas;
use crate::services::{
    ContratoService, DashboardService, DocumentoService, ImovelService, MensagemService,
    PropostaService,
};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Base da RealCloser API (o prefixo /api entra aqui).
    pub api_url: String,
    // Provedor de identidade (endpoints /token, /user, /logout).
    pub auth_url: String,
    pub auth_api_key: String,
}

impl AppConfig {
    pub fn carregar() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_url =
            env::var("API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        let supabase_url = env::var("SUPABASE_URL")
            .map_err(|_| anyhow::anyhow!("SUPABASE_URL deve ser definida"))?;
        let auth_api_key = env::var("SUPABASE_ANON_KEY")
            .map_err(|_| anyhow::anyhow!("SUPABASE_ANON_KEY deve ser definida"))?;

        Ok(Self {
            api_url: format!("{}/api", api_url.trim_end_matches('/')),
            auth_url: format!("{}/auth/v1", supabase_url.trim_end_matches('/')),
            auth_api_key,
        })
    }
}

// O contexto explícito da aplicação: uma instância de cada peça, montada
// aqui e passada adiante. Substitui qualquer estado global mutável.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub sessoes: SessaoStore,
    pub cache: CacheConsultas,
    pub auth: AuthClient,
    pub propostas: PropostaService,
    pub contratos: ContratoService,
    pub imoveis: ImovelService,
    pub documentos: DocumentoService,
    pub mensagens: MensagemService,
    pub dashboard: DashboardService,
}

impl AppState {
    pub fn novo() -> anyhow::Result<Self> {
        let config = AppConfig::carregar()?;

        // Sem política de timeout própria: herdamos os defaults do reqwest.
        let http = reqwest::Client::builder().build()?;

        // --- Monta o gráfico de dependências ---
        let sessoes = SessaoStore::novo();
        let cache = CacheConsultas::novo();

        let auth = AuthClient::novo(
            http.clone(),
            config.auth_url.clone(),
            config.auth_api_key.clone(),
            sessoes.clone(),
        );

        let transporte = Arc::new(HttpTransport::novo(http, config.api_url.clone()));
        let client = ApiClient::novo(transporte, sessoes.clone());

        let frontend = FrontendApi::nova(client.clone());
        let propostas = PropostaService::novo(
            PropostasApi::nova(client.clone()),
            frontend.clone(),
            cache.clone(),
        );
        let contratos = ContratoService::novo(
            ContratosApi::nova(client.clone()),
            TemplatesApi::nova(client.clone()),
            frontend.clone(),
            cache.clone(),
        );
        let imoveis = ImovelService::novo(
            ImoveisApi::nova(client.clone()),
            frontend.clone(),
            cache.clone(),
        );
        let documentos =
            DocumentoService::novo(DocumentosApi::nova(client.clone()), cache.clone());
        let mensagens = MensagemService::novo(MensagensApi::nova(client), cache.clone());
        let dashboard = DashboardService::novo(
            imoveis.clone(),
            propostas.clone(),
            contratos.clone(),
            documentos.clone(),
        );

        Ok(Self {
            config,
            sessoes,
            cache,
            auth,
            propostas,
            contratos,
            imoveis,
            documentos,
            mensagens,
            dashboard,
        })
    }

    /// Teardown de sign-out: encerra a sessão no provedor e esvazia todos
    /// os read-models em cache. Nada do usuário anterior sobrevive.
    pub async fn sair(&self) -> Result<(), crate::common::error::AppError> {
        self.auth.sair().await?;
        self.cache.limpar().await;
        tracing::info!("Sessão encerrada e caches limpos");
        Ok(())
    }
}
