use crate::*;

pub fn handle_inspect_commands(cli: &Cli, manifest: &Manifest) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::List => {
            let mut items: Vec<ModuleItem> = manifest
                .header
                .modules
                .iter()
                .map(|m| ModuleItem {
                    kind: ModuleKind::Header,
                    path: m.to_string_lossy().to_string(),
                    output: manifest.header.output.to_string_lossy().to_string(),
                })
                .collect();
            if let Some(source) = &manifest.source {
                items.extend(source.modules.iter().map(|m| ModuleItem {
                    kind: ModuleKind::Source,
                    path: m.to_string_lossy().to_string(),
                    output: source.output.to_string_lossy().to_string(),
                }));
            }
            print_out(cli.json, &items, |i| {
                format!("{}\t{}\t{}", i.kind.as_str(), i.path, i.output)
            })?;
        }
        Commands::Includes { kind } => {
            let includes = collect_includes(manifest, &cli.root, *kind)?;
            print_out(cli.json, &includes.items(), |i| {
                format!("{}\t{}", i.target, i.first_seen_in)
            })?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}
