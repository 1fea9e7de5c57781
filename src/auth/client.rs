// src/auth/client.rs
//
// Cliente REST do provedor de identidade (API estilo GoTrue). O provedor
// emite os tokens bearer que o gateway injeta em toda chamada à RealCloser
// API; este módulo só conversa com ele e mantém o SessaoStore em dia.

use chrono::{Duration as ChronoDuration, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::auth::session::{Sessao, SessaoStore, UsuarioProvedor};
use crate::common::error::AppError;
use crate::models::auth::Credenciais;

#[derive(Debug, Deserialize)]
struct RespostaToken {
    access_token: String,
    refresh_token: Option<String>,
    // Segundos até expirar, contados a partir de agora.
    expires_in: Option<i64>,
    user: Option<UsuarioProvedor>,
}

#[derive(Debug, Deserialize)]
struct ErroProvedor {
    #[serde(alias = "error_description", alias = "msg", alias = "message")]
    mensagem: Option<String>,
}

#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    sessoes: SessaoStore,
}

impl AuthClient {
    pub fn novo(
        http: reqwest::Client,
        base_url: String,
        api_key: String,
        sessoes: SessaoStore,
    ) -> Self {
        Self {
            http,
            base_url,
            api_key,
            sessoes,
        }
    }

    /// Login com e-mail e senha. Em caso de sucesso a sessão passa a valer
    /// para todo o processo (o gateway a lê a cada chamada).
    pub async fn entrar(&self, credenciais: &Credenciais) -> Result<Sessao, AppError> {
        credenciais.validate()?;

        let url = format!("{}/token?grant_type=password", self.base_url);
        let resposta = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({
                "email": credenciais.email,
                "password": credenciais.senha,
            }))
            .send()
            .await?;

        let sessao = self.sessao_da_resposta(resposta).await?;
        self.sessoes.definir(sessao.clone());
        tracing::info!("✅ Sessão estabelecida para {}", credenciais.email);
        Ok(sessao)
    }

    /// Renova a sessão vigente usando o refresh token.
    pub async fn renovar(&self) -> Result<Sessao, AppError> {
        let atual = self.sessoes.atual().ok_or(AppError::SemSessao)?;
        let refresh = atual.refresh_token.ok_or(AppError::SemSessao)?;

        let url = format!("{}/token?grant_type=refresh_token", self.base_url);
        let resposta = self
            .http
            .post(&url)
            .header("apikey", &self.api_key)
            .json(&serde_json::json!({ "refresh_token": refresh }))
            .send()
            .await?;

        let sessao = self.sessao_da_resposta(resposta).await?;
        self.sessoes.definir(sessao.clone());
        Ok(sessao)
    }

    /// Busca o usuário da sessão vigente no provedor.
    pub async fn usuario_atual(&self) -> Result<UsuarioProvedor, AppError> {
        let token = self.sessoes.token().ok_or(AppError::SemSessao)?;

        let url = format!("{}/user", self.base_url);
        let resposta = self
            .http
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&token)
            .send()
            .await?;

        if resposta.status().as_u16() == 401 {
            // Token morto: derruba a sessão local também.
            self.sessoes.encerrar();
            return Err(AppError::SessaoExpirada);
        }
        if !resposta.status().is_success() {
            return Err(Self::erro_do_provedor(resposta).await);
        }
        Ok(resposta.json::<UsuarioProvedor>().await?)
    }

    /// Sign-out: avisa o provedor e encerra a sessão local. A limpeza dos
    /// caches dependentes é responsabilidade do AppState (teardown).
    pub async fn sair(&self) -> Result<(), AppError> {
        if let Some(token) = self.sessoes.token() {
            let url = format!("{}/logout", self.base_url);
            let resultado = self
                .http
                .post(&url)
                .header("apikey", &self.api_key)
                .bearer_auth(&token)
                .send()
                .await;
            if let Err(e) = resultado {
                // A sessão local morre mesmo assim; o token expira sozinho.
                tracing::warn!("Falha ao notificar logout ao provedor: {}", e);
            }
        }
        self.sessoes.encerrar();
        Ok(())
    }

    async fn sessao_da_resposta(&self, resposta: reqwest::Response) -> Result<Sessao, AppError> {
        let status = resposta.status();
        if status.as_u16() == 401 {
            return Err(AppError::SessaoExpirada);
        }
        if !status.is_success() {
            return Err(Self::erro_do_provedor(resposta).await);
        }

        let token: RespostaToken = resposta.json().await?;
        Ok(Sessao {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expira_em: token
                .expires_in
                .map(|segundos| Utc::now() + ChronoDuration::seconds(segundos)),
            usuario: token.user,
        })
    }

    async fn erro_do_provedor(resposta: reqwest::Response) -> AppError {
        let erro = resposta
            .json::<ErroProvedor>()
            .await
            .ok()
            .and_then(|e| e.mensagem);
        AppError::RegraDeNegocio(
            erro.unwrap_or_else(|| "E-mail ou senha inválidos.".to_string()),
        )
    }
}
