// src/api/test_support.rs
//
// Servidor em memória por trás do seam ApiTransport, para exercitar os
// services de ponta a ponta sem rede. Implementa só as transições que o
// backend real decide: envio, aprovações conjuntas, geração de contrato,
// assinaturas e o chat.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::api::client::{ApiRequisicao, ApiTransport, Metodo, RespostaBruta};
use crate::common::error::AppError;
use crate::models::contrato::{Contrato, ContratoStatus};
use crate::models::mensagem::{AutorTipo, Mensagem};
use crate::models::proposta::{NovaProposta, Proposta, PropostaStatus};

#[derive(Default)]
pub struct Estado {
    pub propostas: HashMap<Uuid, Proposta>,
    pub contratos: HashMap<Uuid, Contrato>,
    pub mensagens: Vec<Mensagem>,
}

pub struct ServidorFake {
    pub estado: Mutex<Estado>,
}

impl ServidorFake {
    pub fn novo() -> Arc<Self> {
        Arc::new(Self {
            estado: Mutex::new(Estado::default()),
        })
    }

    fn ok(data: Value) -> RespostaBruta {
        RespostaBruta {
            status: 200,
            corpo: json!({ "data": data }),
        }
    }

    fn rejeicao(mensagem: &str) -> RespostaBruta {
        RespostaBruta {
            status: 422,
            corpo: json!({ "error": mensagem }),
        }
    }

    fn nao_encontrado() -> RespostaBruta {
        RespostaBruta {
            status: 404,
            corpo: json!({ "error": "Recurso não encontrado." }),
        }
    }
}

fn proposta_de_payload(dados: NovaProposta) -> Proposta {
    let agora = Utc::now();
    Proposta {
        id: Uuid::new_v4(),
        imovel_id: dados.imovel_id,
        comprador_id: dados.comprador_id,
        vendedor_id: dados.vendedor_id,
        corretor_id: dados.corretor_id,
        imobiliaria_id: dados.imobiliaria_id,
        valor: dados.valor,
        forma_pagamento: dados.forma_pagamento,
        relato_negociacao: dados.relato_negociacao,
        bens_que_ficam: dados.bens_que_ficam,
        data_posse: dados.data_posse,
        status: PropostaStatus::Rascunho,
        aprovado_comprador: false,
        aprovado_vendedor: false,
        data_aprovacao_comprador: None,
        data_aprovacao_vendedor: None,
        observacoes: dados.observacoes,
        created_at: agora,
        updated_at: agora,
    }
}

#[async_trait]
impl ApiTransport for ServidorFake {
    async fn executar(&self, req: ApiRequisicao) -> Result<RespostaBruta, AppError> {
        let mut estado = self.estado.lock().await;
        let partes: Vec<&str> = req.caminho.trim_matches('/').split('/').collect();

        let resposta = match (req.metodo, partes.as_slice()) {
            (Metodo::Get, ["propostas"]) => {
                let lista: Vec<&Proposta> = estado.propostas.values().collect();
                RespostaBruta {
                    status: 200,
                    corpo: json!({ "data": lista, "count": lista.len() }),
                }
            }
            (Metodo::Post, ["propostas"]) => {
                let dados: NovaProposta =
                    serde_json::from_value(req.corpo.clone().unwrap_or(Value::Null))?;
                let proposta = proposta_de_payload(dados);
                let corpo = serde_json::to_value(&proposta)?;
                estado.propostas.insert(proposta.id, proposta);
                Self::ok(corpo)
            }
            (Metodo::Get, ["propostas", id]) => match id
                .parse::<Uuid>()
                .ok()
                .and_then(|id| estado.propostas.get(&id))
            {
                Some(p) => Self::ok(serde_json::to_value(p)?),
                None => Self::nao_encontrado(),
            },
            (Metodo::Post, ["propostas", id, "enviar"]) => {
                let id: Uuid = id.parse().map_err(|e| anyhow::anyhow!("uuid: {e}"))?;
                match estado.propostas.get_mut(&id) {
                    None => Self::nao_encontrado(),
                    Some(p) if p.status != PropostaStatus::Rascunho => {
                        Self::rejeicao("Apenas propostas em rascunho podem ser enviadas.")
                    }
                    Some(p) => {
                        p.status = PropostaStatus::Enviada;
                        p.updated_at = Utc::now();
                        Self::ok(serde_json::to_value(&*p)?)
                    }
                }
            }
            (Metodo::Post, ["propostas", id, acao @ ("aprovar-comprador" | "aprovar-vendedor")]) => {
                let id: Uuid = id.parse().map_err(|e| anyhow::anyhow!("uuid: {e}"))?;
                match estado.propostas.get_mut(&id) {
                    None => Self::nao_encontrado(),
                    Some(p) if p.status != PropostaStatus::Enviada => {
                        Self::rejeicao("A proposta ainda não foi enviada.")
                    }
                    Some(p) => {
                        if *acao == "aprovar-comprador" {
                            p.aprovado_comprador = true;
                            p.data_aprovacao_comprador = Some(Utc::now());
                        } else {
                            p.aprovado_vendedor = true;
                            p.data_aprovacao_vendedor = Some(Utc::now());
                        }
                        // Transição conjunta: decisão do servidor.
                        if p.aprovado_comprador && p.aprovado_vendedor {
                            p.status = PropostaStatus::Aprovada;
                        }
                        p.updated_at = Utc::now();
                        Self::ok(serde_json::to_value(&*p)?)
                    }
                }
            }
            (Metodo::Get, ["contratos"]) => {
                let lista: Vec<&Contrato> = estado.contratos.values().collect();
                RespostaBruta {
                    status: 200,
                    corpo: json!({ "data": lista, "count": lista.len() }),
                }
            }
            (Metodo::Post, ["contratos", "gerar"]) => {
                let proposta_id: Uuid = req
                    .corpo
                    .as_ref()
                    .and_then(|c| c.get("proposta_id"))
                    .and_then(|v| v.as_str())
                    .and_then(|s| s.parse().ok())
                    .ok_or_else(|| anyhow::anyhow!("proposta_id ausente"))?;

                let ja_existe = estado
                    .contratos
                    .values()
                    .any(|c| c.proposta_id == proposta_id);
                let proposta = estado
                    .propostas
                    .get(&proposta_id)
                    .map(|p| (p.status, p.imovel_id));
                match proposta {
                    None => Self::nao_encontrado(),
                    Some((status, _)) if status != PropostaStatus::Aprovada => {
                        Self::rejeicao("A proposta ainda não foi aprovada pelas duas partes.")
                    }
                    Some(_) if ja_existe => Self::rejeicao("Proposta já possui contrato."),
                    Some((_, imovel_id)) => {
                        let agora = Utc::now();
                        let contrato = Contrato {
                            id: Uuid::new_v4(),
                            proposta_id,
                            imovel_id,
                            conteudo: "CONTRATO DE COMPRA E VENDA DE IMÓVEL".to_string(),
                            status: ContratoStatus::Pendente,
                            gerado_por_ia: true,
                            modelo_imobiliaria_id: None,
                            aprovado_comprador: false,
                            aprovado_vendedor: false,
                            aprovado_imobiliaria: false,
                            data_aprovacao_comprador: None,
                            data_aprovacao_vendedor: None,
                            data_aprovacao_imobiliaria: None,
                            assinado_comprador: false,
                            assinado_vendedor: false,
                            data_assinatura_comprador: None,
                            data_assinatura_vendedor: None,
                            arquivo_assinado_url: None,
                            created_at: agora,
                            updated_at: agora,
                        };
                        let corpo = serde_json::to_value(&contrato)?;
                        estado.contratos.insert(contrato.id, contrato);
                        Self::ok(corpo)
                    }
                }
            }
            (Metodo::Get, ["contratos", id]) => match id
                .parse::<Uuid>()
                .ok()
                .and_then(|id| estado.contratos.get(&id))
            {
                Some(c) => Self::ok(serde_json::to_value(c)?),
                None => Self::nao_encontrado(),
            },
            (Metodo::Post, ["contratos", id, "aprovar"]) => {
                let id: Uuid = id.parse().map_err(|e| anyhow::anyhow!("uuid: {e}"))?;
                let parte = req
                    .corpo
                    .as_ref()
                    .and_then(|c| c.get("parte"))
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string();
                match estado.contratos.get_mut(&id) {
                    None => Self::nao_encontrado(),
                    Some(c) => {
                        let agora = Utc::now();
                        match parte.as_str() {
                            "comprador" => {
                                c.aprovado_comprador = true;
                                c.data_aprovacao_comprador = Some(agora);
                            }
                            "vendedor" => {
                                c.aprovado_vendedor = true;
                                c.data_aprovacao_vendedor = Some(agora);
                            }
                            "imobiliaria" => {
                                c.aprovado_imobiliaria = true;
                                c.data_aprovacao_imobiliaria = Some(agora);
                            }
                            _ => return Ok(Self::rejeicao("Parte desconhecida.")),
                        }
                        if c.aprovado_comprador && c.aprovado_vendedor {
                            c.status = ContratoStatus::Aprovado;
                        }
                        c.updated_at = agora;
                        Self::ok(serde_json::to_value(&*c)?)
                    }
                }
            }
            (Metodo::Post, ["contratos", id, "assinar"]) => {
                let id: Uuid = id.parse().map_err(|e| anyhow::anyhow!("uuid: {e}"))?;
                let corpo = req.corpo.clone().unwrap_or(Value::Null);
                let parte = corpo
                    .get("parte")
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string();
                match estado.contratos.get_mut(&id) {
                    None => Self::nao_encontrado(),
                    Some(c) if c.status != ContratoStatus::Aprovado => {
                        Self::rejeicao("O contrato ainda não foi aprovado.")
                    }
                    Some(c) => {
                        let agora = Utc::now();
                        match parte.as_str() {
                            "comprador" => {
                                c.assinado_comprador = true;
                                c.data_assinatura_comprador = Some(agora);
                            }
                            "vendedor" => {
                                c.assinado_vendedor = true;
                                c.data_assinatura_vendedor = Some(agora);
                            }
                            _ => return Ok(Self::rejeicao("Parte desconhecida.")),
                        }
                        if let Some(url) = corpo.get("arquivo_url").and_then(|v| v.as_str()) {
                            c.arquivo_assinado_url = Some(url.to_string());
                        }
                        if c.assinado_comprador && c.assinado_vendedor {
                            c.status = ContratoStatus::Assinado;
                        }
                        c.updated_at = agora;
                        Self::ok(serde_json::to_value(&*c)?)
                    }
                }
            }
            (Metodo::Get, ["mensagens", "contrato", contrato_id]) => {
                let contrato_id: Uuid =
                    contrato_id.parse().map_err(|e| anyhow::anyhow!("uuid: {e}"))?;
                let lista: Vec<&Mensagem> = estado
                    .mensagens
                    .iter()
                    .filter(|m| m.contrato_id == contrato_id)
                    .collect();
                RespostaBruta {
                    status: 200,
                    corpo: json!({ "data": lista, "count": lista.len() }),
                }
            }
            (Metodo::Post, ["mensagens"]) => {
                let corpo = req.corpo.clone().unwrap_or(Value::Null);
                let mensagem = Mensagem {
                    id: Uuid::new_v4(),
                    contrato_id: corpo
                        .get("contrato_id")
                        .and_then(|v| v.as_str())
                        .and_then(|s| s.parse().ok())
                        .ok_or_else(|| anyhow::anyhow!("contrato_id ausente"))?,
                    usuario_id: Uuid::new_v4(),
                    texto: corpo
                        .get("texto")
                        .and_then(|v| v.as_str())
                        .unwrap_or_default()
                        .to_string(),
                    anexos: None,
                    autor_tipo: AutorTipo::Humano,
                    criado_em: Utc::now(),
                    usuario: None,
                };
                let valor = serde_json::to_value(&mensagem)?;
                estado.mensagens.push(mensagem);
                Self::ok(valor)
            }
            _ => Self::nao_encontrado(),
        };

        Ok(resposta)
    }
}

/// Payload de proposta pronto para os testes.
pub fn nova_proposta() -> NovaProposta {
    NovaProposta {
        imovel_id: Uuid::new_v4(),
        comprador_id: Uuid::new_v4(),
        vendedor_id: Uuid::new_v4(),
        corretor_id: None,
        imobiliaria_id: Uuid::new_v4(),
        valor: Decimal::new(450_000, 0),
        forma_pagamento: "financiamento".to_string(),
        relato_negociacao: None,
        bens_que_ficam: None,
        data_posse: None,
        observacoes: None,
    }
}
