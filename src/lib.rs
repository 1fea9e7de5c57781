// Núcleo de aplicação do painel RealCloser: gateway HTTP tipado, sessão,
// cache de consultas com invalidação explícita, o workflow de aprovação e
// assinatura de propostas/contratos e a agregação de estatísticas.
// A renderização fica fora daqui; toda regra de negócio vive na API remota.

pub mod api;
pub mod auth;
pub mod cache;
pub mod common;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
