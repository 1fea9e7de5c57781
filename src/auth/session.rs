// src/auth/session.rs

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use uuid::Uuid;

// Usuário como o provedor de identidade o enxerga (não confundir com o
// `models::Usuario` da API, que carrega o perfil completo da plataforma).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsuarioProvedor {
    pub id: Uuid,
    pub email: Option<String>,
}

// Sessão vigente: token opaco emitido pelo provedor + validade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sessao {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expira_em: Option<DateTime<Utc>>,
    pub usuario: Option<UsuarioProvedor>,
}

// Última sessão conhecida do processo, com canal de notificação de
// mudanças. Substitui o store global: uma instância, criada junto do
// AppState e passada explicitamente a quem precisa.
#[derive(Clone)]
pub struct SessaoStore {
    tx: Arc<watch::Sender<Option<Sessao>>>,
}

impl SessaoStore {
    pub fn novo() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    pub fn atual(&self) -> Option<Sessao> {
        self.tx.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.tx.borrow().as_ref().map(|s| s.access_token.clone())
    }

    pub fn autenticado(&self) -> bool {
        self.tx.borrow().is_some()
    }

    pub fn definir(&self, sessao: Sessao) {
        self.tx.send_replace(Some(sessao));
    }

    /// Usado tanto pelo sign-out explícito quanto pelo 401 forçado.
    pub fn encerrar(&self) {
        self.tx.send_replace(None);
    }

    /// Assinatura de mudanças de autenticação (login, logout, expiração).
    pub fn assinar_mudancas(&self) -> watch::Receiver<Option<Sessao>> {
        self.tx.subscribe()
    }
}

impl Default for SessaoStore {
    fn default() -> Self {
        Self::novo()
    }
}
