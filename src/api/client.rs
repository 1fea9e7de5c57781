// src/api/client.rs
//
// Gateway HTTP para a RealCloser API. Uma única porta de saída: injeta o
// bearer token da sessão em toda chamada, decodifica os envelopes
// { data } / { data, count } e aplica o contrato de 401 (sessão local
// encerrada antes de o erro subir; nenhuma mutação adicional acontece).

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::auth::session::SessaoStore;
use crate::common::error::AppError;

// --- Transporte ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metodo {
    Get,
    Post,
    Put,
    Delete,
}

impl Metodo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metodo::Get => "GET",
            Metodo::Post => "POST",
            Metodo::Put => "PUT",
            Metodo::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiRequisicao {
    pub metodo: Metodo,
    pub caminho: String,
    pub query: Vec<(String, String)>,
    pub corpo: Option<serde_json::Value>,
    pub bearer: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RespostaBruta {
    pub status: u16,
    pub corpo: serde_json::Value,
}

// Seam de teste e de transporte: o gateway só conhece esta interface.
#[async_trait]
pub trait ApiTransport: Send + Sync {
    async fn executar(&self, req: ApiRequisicao) -> Result<RespostaBruta, AppError>;
}

// Transporte de produção sobre reqwest. Sem política de timeout própria:
// herda os defaults do cliente construído no AppState.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn novo(http: reqwest::Client, base_url: String) -> Self {
        Self { http, base_url }
    }
}

#[async_trait]
impl ApiTransport for HttpTransport {
    async fn executar(&self, req: ApiRequisicao) -> Result<RespostaBruta, AppError> {
        let url = format!("{}{}", self.base_url, req.caminho);
        let mut chamada = match req.metodo {
            Metodo::Get => self.http.get(&url),
            Metodo::Post => self.http.post(&url),
            Metodo::Put => self.http.put(&url),
            Metodo::Delete => self.http.delete(&url),
        };

        if !req.query.is_empty() {
            chamada = chamada.query(&req.query);
        }
        if let Some(corpo) = &req.corpo {
            chamada = chamada.json(corpo);
        }
        if let Some(token) = &req.bearer {
            chamada = chamada.bearer_auth(token);
        }

        let resposta = chamada.send().await?;
        let status = resposta.status().as_u16();
        // Corpo vazio (204, DELETE) vira null; corpo não-JSON também.
        let corpo = resposta
            .json::<serde_json::Value>()
            .await
            .unwrap_or(serde_json::Value::Null);

        Ok(RespostaBruta { status, corpo })
    }
}

// --- Envelopes ---

#[derive(Debug, Deserialize)]
struct EnvelopeItem<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct EnvelopeLista<T> {
    data: Vec<T>,
    #[serde(default)]
    count: Option<i64>,
}

// Lista paginada com contagem total (endpoints "frontend").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagina<T> {
    pub itens: Vec<T>,
    pub count: i64,
}

/// Converte um struct de filtro serializável em pares de query string,
/// descartando campos nulos.
pub fn query_de<T: Serialize>(filtro: &T) -> Vec<(String, String)> {
    let valor = match serde_json::to_value(filtro) {
        Ok(v) => v,
        Err(_) => return Vec::new(),
    };
    let Some(objeto) = valor.as_object() else {
        return Vec::new();
    };
    objeto
        .iter()
        .filter_map(|(chave, v)| {
            let texto = match v {
                serde_json::Value::Null => return None,
                serde_json::Value::String(s) => s.clone(),
                outro => outro.to_string(),
            };
            Some((chave.clone(), texto))
        })
        .collect()
}

// --- Gateway ---

#[derive(Clone)]
pub struct ApiClient {
    transporte: Arc<dyn ApiTransport>,
    sessoes: SessaoStore,
}

impl ApiClient {
    pub fn novo(transporte: Arc<dyn ApiTransport>, sessoes: SessaoStore) -> Self {
        Self {
            transporte,
            sessoes,
        }
    }

    async fn chamar(
        &self,
        metodo: Metodo,
        caminho: String,
        query: Vec<(String, String)>,
        corpo: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, AppError> {
        let req = ApiRequisicao {
            metodo,
            caminho,
            query,
            corpo,
            bearer: self.sessoes.token(),
        };
        let caminho_log = req.caminho.clone();
        let resposta = self.transporte.executar(req).await?;

        match resposta.status {
            200..=299 => Ok(resposta.corpo),
            // Token expirado ou inválido: a sessão local cai junto.
            401 => {
                tracing::warn!("401 em {} {}: encerrando sessão", metodo.as_str(), caminho_log);
                self.sessoes.encerrar();
                Err(AppError::SessaoExpirada)
            }
            404 => Err(AppError::NaoEncontrado),
            400..=499 => Err(AppError::RegraDeNegocio(Self::mensagem_do_corpo(
                &resposta.corpo,
            ))),
            outro => Err(AppError::Interno(anyhow::anyhow!(
                "A API retornou status {} em {} {}",
                outro,
                metodo.as_str(),
                caminho_log
            ))),
        }
    }

    fn mensagem_do_corpo(corpo: &serde_json::Value) -> String {
        corpo
            .get("error")
            .or_else(|| corpo.get("message"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| "A API rejeitou a requisição.".to_string())
    }

    // Item único: envelope { data }.
    pub async fn get<T: DeserializeOwned>(
        &self,
        caminho: &str,
        query: Vec<(String, String)>,
    ) -> Result<T, AppError> {
        let corpo = self.chamar(Metodo::Get, caminho.to_string(), query, None).await?;
        let envelope: EnvelopeItem<T> = serde_json::from_value(corpo)?;
        Ok(envelope.data)
    }

    // Lista: envelope { data, count }.
    pub async fn get_lista<T: DeserializeOwned>(
        &self,
        caminho: &str,
        query: Vec<(String, String)>,
    ) -> Result<Vec<T>, AppError> {
        let corpo = self.chamar(Metodo::Get, caminho.to_string(), query, None).await?;
        let envelope: EnvelopeLista<T> = serde_json::from_value(corpo)?;
        Ok(envelope.data)
    }

    pub async fn get_pagina<T: DeserializeOwned>(
        &self,
        caminho: &str,
        query: Vec<(String, String)>,
    ) -> Result<Pagina<T>, AppError> {
        let corpo = self.chamar(Metodo::Get, caminho.to_string(), query, None).await?;
        let envelope: EnvelopeLista<T> = serde_json::from_value(corpo)?;
        let count = envelope.count.unwrap_or(envelope.data.len() as i64);
        Ok(Pagina {
            itens: envelope.data,
            count,
        })
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        caminho: &str,
        corpo: Option<serde_json::Value>,
    ) -> Result<T, AppError> {
        let corpo = self.chamar(Metodo::Post, caminho.to_string(), Vec::new(), corpo).await?;
        let envelope: EnvelopeItem<T> = serde_json::from_value(corpo)?;
        Ok(envelope.data)
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        caminho: &str,
        corpo: serde_json::Value,
    ) -> Result<T, AppError> {
        let corpo = self
            .chamar(Metodo::Put, caminho.to_string(), Vec::new(), Some(corpo))
            .await?;
        let envelope: EnvelopeItem<T> = serde_json::from_value(corpo)?;
        Ok(envelope.data)
    }

    pub async fn delete(&self, caminho: &str) -> Result<(), AppError> {
        self.chamar(Metodo::Delete, caminho.to_string(), Vec::new(), None)
            .await?;
        Ok(())
    }
}
