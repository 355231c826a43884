// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// CONFIGURAÇÃO DO PLUGIN
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// Configurações do cliente da Research API.
// Todas as configurações podem ser definidas via .env
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// URL base padrão da Research API (serviço local)
pub const DEFAULT_BASE_URL: &str = "http://localhost:4030";

/// Timeout padrão das requisições, em segundos
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Chave da configuração de URL base no manifesto do plugin
pub const BASE_URL_KEY: &str = "baseURL";

/// Configuração do plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    /// URL base da Research API.
    /// Padrão: `http://localhost:4030`
    pub base_url: String,

    /// Timeout de cada requisição HTTP.
    /// Padrão: 30
    pub timeout_secs: u64,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PluginConfig {
    /// Cria configuração padrão.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a URL base; vazio ou só espaços volta para o padrão.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = resolve_base_url(Some(base_url));
        self
    }

    /// Define o timeout em segundos.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Monta a configuração a partir de uma função de lookup.
    ///
    /// Separado de [`load_plugin_config`] para permitir testes sem
    /// mexer nas variáveis de ambiente do processo.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        // RESEARCH_API_BASE_URL: raiz da API
        if let Some(base_url) = lookup("RESEARCH_API_BASE_URL") {
            config.base_url = resolve_base_url(Some(&base_url));
            log::info!("📦 RESEARCH_API_BASE_URL={}", config.base_url);
        }

        // RESEARCH_API_TIMEOUT_SECS: timeout por requisição
        if let Some(timeout_str) = lookup("RESEARCH_API_TIMEOUT_SECS") {
            match timeout_str.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => {
                    config.timeout_secs = secs;
                    log::info!("📦 RESEARCH_API_TIMEOUT_SECS={}", secs);
                }
                _ => log::warn!(
                    "⚠ RESEARCH_API_TIMEOUT_SECS inválido ({:?}), usando {}",
                    timeout_str,
                    config.timeout_secs
                ),
            }
        }

        config
    }
}

/// Resolve a URL base configurada no host.
///
/// Valor ausente ou vazio usa [`DEFAULT_BASE_URL`]. Uma única barra
/// final é removida para não gerar `//www/...` no path.
pub fn resolve_base_url(configured: Option<&str>) -> String {
    let base = configured.map(str::trim).filter(|s| !s.is_empty());
    let base = base.unwrap_or(DEFAULT_BASE_URL);
    base.strip_suffix('/').unwrap_or(base).to_string()
}

/// Carrega configuração do plugin a partir das variáveis de ambiente.
///
/// Variáveis suportadas:
/// - `RESEARCH_API_BASE_URL`: URL base (padrão: `http://localhost:4030`)
/// - `RESEARCH_API_TIMEOUT_SECS`: Timeout por requisição (padrão: 30)
///
/// # Exemplo
///
/// ```rust,ignore
/// // .env
/// RESEARCH_API_BASE_URL=http://research.internal:8080
///
/// // código
/// let config = load_plugin_config();
/// assert_eq!(config.base_url, "http://research.internal:8080");
/// ```
pub fn load_plugin_config() -> PluginConfig {
    PluginConfig::from_lookup(|key| std::env::var(key).ok())
}
