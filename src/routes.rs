// src/routes.rs
//
// Superfície de rotas do app e o gate de autenticação. O gate é uma
// função pura: (caminho, sessão presente) -> decisão. Quem navega de fato
// é a camada de apresentação; aqui só mora a regra.

use uuid::Uuid;

// --- Públicas ---
pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const FORGOT_PASSWORD: &str = "/forgot-password";

// --- Autenticadas ---
pub const DASHBOARD: &str = "/dashboard";
pub const IMOVEIS: &str = "/imoveis";
pub const PROPOSTAS: &str = "/propostas";
pub const CONTRATOS: &str = "/contratos";
pub const TEMPLATES: &str = "/templates";
pub const DOCUMENTOS: &str = "/documentos";
pub const MENSAGENS: &str = "/mensagens";

pub fn detalhe_imovel(id: Uuid) -> String {
    format!("/imoveis/{}", id)
}

pub fn editar_imovel(id: Uuid) -> String {
    format!("/imoveis/{}/editar", id)
}

pub fn detalhe_proposta(id: Uuid) -> String {
    format!("/propostas/{}", id)
}

pub fn detalhe_contrato(id: Uuid) -> String {
    format!("/contratos/{}", id)
}

pub fn chat_do_contrato(id: Uuid) -> String {
    format!("/contratos/{}/chat", id)
}

pub fn assinatura_do_contrato(id: Uuid) -> String {
    format!("/contratos/{}/assinatura", id)
}

// Prefixos que exigem sessão.
const PROTEGIDAS: &[&str] = &[
    DASHBOARD, IMOVEIS, PROPOSTAS, CONTRATOS, TEMPLATES, DOCUMENTOS, MENSAGENS,
];

// Rotas de entrada: com sessão ativa, mandam para o painel.
const DE_AUTENTICACAO: &[&str] = &[LOGIN, REGISTER];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acesso {
    Permitir,
    // Carrega o destino original para voltar depois do login.
    RedirecionarLogin { destino: String },
    RedirecionarPainel,
}

pub fn decidir_acesso(caminho: &str, autenticado: bool) -> Acesso {
    let protegida = PROTEGIDAS.iter().any(|p| caminho.starts_with(p));
    let de_autenticacao = DE_AUTENTICACAO.iter().any(|p| caminho.starts_with(p));

    if protegida && !autenticado {
        return Acesso::RedirecionarLogin {
            destino: caminho.to_string(),
        };
    }
    if de_autenticacao && autenticado {
        return Acesso::RedirecionarPainel;
    }
    Acesso::Permitir
}

/// Para onde o app manda o usuário quando a sessão cai (401 ou sign-out).
pub fn destino_apos_sessao_encerrada() -> &'static str {
    LOGIN
}
