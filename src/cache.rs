// src/cache.rs
//
// Cache de consultas do processo: um mapa de chave -> payload JSON com
// janela de validade por entrada. Escritas nunca tocam aqui diretamente;
// os services invalidam prefixos via tabela de dependências e a próxima
// leitura busca de novo. Não há garantia transacional entre chaves.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{watch, Mutex};

use crate::common::error::AppError;

// --- Chaves ---

// Chave hierárquica, ex.: ["contratos"], ["contratos", "<id>"],
// ["frontend", "meus-contratos", "<filtro>"]. Invalidação é por prefixo.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChaveConsulta(Vec<String>);

impl ChaveConsulta {
    pub fn nova<I, S>(segmentos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ChaveConsulta(segmentos.into_iter().map(Into::into).collect())
    }

    pub fn comeca_com(&self, prefixo: &[&str]) -> bool {
        prefixo.len() <= self.0.len()
            && prefixo.iter().zip(&self.0).all(|(p, s)| p == s)
    }
}

/// Segmento de chave para um filtro opcional: filtros diferentes são
/// entradas de cache diferentes (mesmo comportamento das query keys do
/// frontend original).
pub fn segmento_de_filtro<T: serde::Serialize>(filtro: Option<&T>) -> String {
    match filtro {
        None => "todas".to_string(),
        Some(f) => serde_json::to_string(f).unwrap_or_else(|_| "todas".to_string()),
    }
}

// --- Janelas de validade por recurso (documentadas, não convenção) ---

pub mod ttl {
    use std::time::Duration;

    pub const MINHA_IMOBILIARIA: Duration = Duration::from_secs(5 * 60);
    pub const MEUS_IMOVEIS: Duration = Duration::from_secs(2 * 60);
    pub const MINHAS_PROPOSTAS: Duration = Duration::from_secs(60);
    pub const MEUS_CONTRATOS: Duration = Duration::from_secs(60);
    // Listas e itens avulsos ficam frescos por pouco tempo.
    pub const PADRAO: Duration = Duration::from_secs(30);
}

// --- Tabela de dependências mutação -> chaves ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutacao {
    CriarProposta,
    AtualizarProposta,
    EnviarProposta,
    AprovarProposta,
    GerarContrato,
    AprovarContrato,
    AssinarContrato,
    CriarImovel,
    AtualizarImovel,
    DeletarImovel,
    CriarTemplate,
    AtualizarTemplate,
    AtivarTemplate,
    DesativarTemplate,
    DeletarTemplate,
    CriarDocumento,
    AtualizarDocumento,
    VerificarDocumento,
    EnviarMensagem,
    AtualizarMensagem,
    AdicionarAnexoMensagem,
    DeletarMensagem,
}

/// Tabela explícita: cada mutação lista exatamente os prefixos de leitura
/// que deixa obsoletos. Toda invalidação dos services passa por aqui, o que
/// mantém a consistência do cache auditável em um único lugar.
pub fn prefixos_invalidados(mutacao: Mutacao) -> &'static [&'static [&'static str]] {
    use Mutacao::*;
    match mutacao {
        CriarProposta | AtualizarProposta | EnviarProposta | AprovarProposta => {
            &[&["propostas"], &["frontend", "minhas-propostas"]]
        }
        // Gerar contrato muda os dois mundos: nasce um contrato e a
        // proposta passa a ter `tem_contrato = true`.
        GerarContrato => &[
            &["contratos"],
            &["propostas"],
            &["frontend", "meus-contratos"],
            &["frontend", "minhas-propostas"],
        ],
        AprovarContrato | AssinarContrato => {
            &[&["contratos"], &["frontend", "meus-contratos"]]
        }
        CriarImovel | AtualizarImovel | DeletarImovel => {
            &[&["imoveis"], &["frontend", "meus-imoveis"]]
        }
        CriarTemplate | AtualizarTemplate | AtivarTemplate | DesativarTemplate
        | DeletarTemplate => &[&["templates"]],
        CriarDocumento | AtualizarDocumento | VerificarDocumento => &[&["documentos"]],
        EnviarMensagem | AtualizarMensagem | AdicionarAnexoMensagem | DeletarMensagem => {
            &[&["mensagens"]]
        }
    }
}

// --- O cache em si ---

struct ValorGuardado {
    payload: serde_json::Value,
    expira_em: Instant,
}

#[derive(Default)]
struct Entrada {
    valor: Option<ValorGuardado>,
    // Presente enquanto alguém busca esta chave; waiters assinam o canal.
    em_voo: Option<watch::Sender<()>>,
}

#[derive(Clone, Default)]
pub struct CacheConsultas {
    inner: Arc<Mutex<HashMap<ChaveConsulta, Entrada>>>,
}

impl CacheConsultas {
    pub fn novo() -> Self {
        Self::default()
    }

    /// Devolve o valor em cache se ainda estiver dentro da janela; senão
    /// executa `buscar`. No máximo uma busca em voo por chave: chamadas
    /// concorrentes aguardam a que chegou primeiro. Uma busca que falha não
    /// entra no cache; o próximo interessado tenta de novo.
    pub async fn obter_ou_buscar<T, F, Fut>(
        &self,
        chave: ChaveConsulta,
        ttl: Duration,
        buscar: F,
    ) -> Result<T, AppError>
    where
        T: Serialize + DeserializeOwned,
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        loop {
            let mut rx = {
                let mut mapa = self.inner.lock().await;
                let entrada = mapa.entry(chave.clone()).or_default();

                if let Some(valor) = &entrada.valor {
                    if valor.expira_em > Instant::now() {
                        return Ok(serde_json::from_value(valor.payload.clone())?);
                    }
                }

                match &entrada.em_voo {
                    Some(tx) => tx.subscribe(),
                    None => {
                        // Ninguém buscando: esta chamada vira a buscadora.
                        let (tx, _rx) = watch::channel(());
                        entrada.em_voo = Some(tx);
                        drop(mapa);

                        let resultado = buscar().await;

                        let mut mapa = self.inner.lock().await;
                        let entrada = mapa.entry(chave.clone()).or_default();
                        // Soltar o sender acorda todos os que esperam.
                        entrada.em_voo = None;

                        return match resultado {
                            Ok(valor) => {
                                entrada.valor = Some(ValorGuardado {
                                    payload: serde_json::to_value(&valor)?,
                                    expira_em: Instant::now() + ttl,
                                });
                                Ok(valor)
                            }
                            Err(e) => Err(e),
                        };
                    }
                }
            };

            // Outra chamada está buscando esta chave. `changed` resolve
            // tanto no término quanto se o sender já tiver sido solto.
            let _ = rx.changed().await;
        }
    }

    /// Remove toda entrada cujo prefixo de chave casa. Idempotente: invalidar
    /// o que já está vazio não dispara busca nenhuma.
    pub async fn invalidar(&self, prefixo: &[&str]) {
        let mut mapa = self.inner.lock().await;
        for (chave, entrada) in mapa.iter_mut() {
            if chave.comeca_com(prefixo) {
                entrada.valor = None;
            }
        }
    }

    /// Invalidação dirigida pela tabela de dependências.
    pub async fn invalidar_mutacao(&self, mutacao: Mutacao) {
        for prefixo in prefixos_invalidados(mutacao) {
            self.invalidar(prefixo).await;
        }
    }

    /// Esvazia tudo. Usado no teardown de sign-out.
    pub async fn limpar(&self) {
        self.inner.lock().await.clear();
    }
}
