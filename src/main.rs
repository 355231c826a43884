// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// RESEARCH API CLI
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//
// CLI para executar os nodes do plugin fora do editor.
//
// Uso:
//   research-api-cli search "Whats new in AI?"
//   research-api-cli scrape https://github.com/hushaudio
//   research-api-cli dedupe --separator "," "A,B,A,C"
//   echo "a. a. b" | research-api-cli dedupe
//   research-api-cli nodes
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

use research_api_plugin::prelude::*;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

/// Tenta carregar o arquivo .env do diretório atual ou do diretório pai
fn load_dotenv() {
    for path in [PathBuf::from(".env"), PathBuf::from("../.env")] {
        if path.exists() {
            match dotenvy::from_path(&path) {
                Ok(_) => {
                    log::debug!("✓ Carregado .env de: {:?}", path);
                    return;
                }
                Err(e) => eprintln!("⚠ Erro ao carregar {:?}: {}", path, e),
            }
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Research API CLI v{}", research_api_plugin::VERSION);
    eprintln!();
    eprintln!("Uso: {} <comando> [argumentos]", program);
    eprintln!();
    eprintln!("Comandos:");
    eprintln!("  search <query>                    Busca web via Research API");
    eprintln!("  scrape <url>                      Scraping de uma URL via Research API");
    eprintln!("  dedupe [--separator <sep>] [txt]  Remove sentenças duplicadas (stdin se vazio)");
    eprintln!("  nodes                             Mostra o manifesto do plugin");
    eprintln!();
    eprintln!("Variáveis de ambiente:");
    eprintln!("  RESEARCH_API_BASE_URL      URL base (padrão: {})", research_api_plugin::DEFAULT_BASE_URL);
    eprintln!("  RESEARCH_API_TIMEOUT_SECS  Timeout por requisição (padrão: 30)");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Carregar .env PRIMEIRO, antes de qualquer coisa
    load_dotenv();

    // Inicializar logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("research-api-cli");

    if args.len() < 2 {
        print_usage(program);
        std::process::exit(1);
    }

    let plugin = ResearchApiPlugin::new();

    match args[1].as_str() {
        "search" if args.len() >= 3 => {
            let mut node = plugin.create(NodeKind::Search);
            if let AnyChartNode::Search(n) = &mut node {
                n.data.search_query = args[2..].join(" ");
            }
            run_node(&plugin, &node, remote_context()?).await
        }
        "scrape" if args.len() == 3 => {
            let mut node = plugin.create(NodeKind::Scrape);
            if let AnyChartNode::Scrape(n) = &mut node {
                n.data.url = args[2].clone();
            }
            run_node(&plugin, &node, remote_context()?).await
        }
        "dedupe" => {
            let (separator, text) = parse_dedupe_args(&args[2..])?;
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let mut node = plugin.create(NodeKind::RemoveDuplicates);
            if let AnyChartNode::RemoveDuplicates(n) = &mut node {
                n.data.some_string = text;
                if let Some(separator) = separator {
                    n.data.separator = separator;
                }
            }
            // Dedupe não acessa a rede
            let ctx = ProcessContext::new(Arc::new(MockResearchApi::new()));
            run_node(&plugin, &node, ctx).await
        }
        "nodes" => {
            let nodes: Vec<_> = NodeKind::all()
                .iter()
                .map(|kind| {
                    let node = plugin.create(*kind);
                    serde_json::json!({
                        "node": &node,
                        "inputs": plugin.input_definitions(&node),
                        "outputs": plugin.output_definitions(&node),
                        "editors": plugin.editors(&node),
                        "body": plugin.body(&node),
                    })
                })
                .collect();

            let output = serde_json::json!({
                "plugin": plugin.manifest(),
                "nodes": nodes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        _ => {
            print_usage(program);
            std::process::exit(1);
        }
    }
}

/// Separa `--separator <sep>` do texto posicional
fn parse_dedupe_args(args: &[String]) -> anyhow::Result<(Option<String>, Option<String>)> {
    let mut separator = None;
    let mut words = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--separator" || arg == "-s" {
            let value = iter
                .next()
                .ok_or_else(|| anyhow::anyhow!("--separator requires a value"))?;
            separator = Some(value.clone());
        } else {
            words.push(arg.as_str());
        }
    }

    let text = if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    };
    Ok((separator, text))
}

fn remote_context() -> anyhow::Result<ProcessContext> {
    let config = load_plugin_config();
    log::info!("🔧 Research API em {}", config.base_url);
    Ok(ProcessContext::from_config(&config)?)
}

async fn run_node(
    plugin: &ResearchApiPlugin,
    node: &AnyChartNode,
    ctx: ProcessContext,
) -> anyhow::Result<()> {
    let outputs = plugin.process(node, &Inputs::new(), &ctx).await?;

    // Saída ordenada por porta para ficar estável entre execuções
    let ordered: std::collections::BTreeMap<_, _> = outputs.into_iter().collect();
    println!("{}", serde_json::to_string_pretty(&ordered)?);
    Ok(())
}
