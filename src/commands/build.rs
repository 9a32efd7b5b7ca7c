use crate::*;
use anyhow::Context;

fn with_version(manifest: &Manifest, lib_version: Option<&str>) -> Manifest {
    let mut m = manifest.clone();
    if let Some(v) = lib_version {
        m.version = v.to_string();
    }
    m
}

fn output_rows(outputs: &[OutputReport]) -> Vec<String> {
    outputs
        .iter()
        .map(|o| {
            format!(
                "{}\t{}\t{}\t{} modules\t{} includes\t{} lines",
                o.kind.as_str(),
                o.status,
                o.path,
                o.modules,
                o.includes,
                o.code_lines
            )
        })
        .collect()
}

pub fn handle_build_commands(cli: &Cli, manifest: &Manifest) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Build {
            lib_version,
            header_only,
        } => {
            let manifest = with_version(manifest, lib_version.as_deref());
            let outputs = amalgamate_all(&manifest, &cli.root, *header_only)?;

            // every output is staged before any of them replaces the old file
            let mut staged = Vec::new();
            for a in &outputs {
                let path = cli.root.join(&a.output);
                staged.push(
                    stage_write(&path, &a.text)
                        .with_context(|| format!("writing {} output", a.kind.as_str()))?,
                );
            }
            commit_all(staged).context("replacing outputs")?;

            let mut reports = Vec::new();
            for a in &outputs {
                tracing::info!(
                    output = %cli.root.join(&a.output).display(),
                    bytes = a.text.len(),
                    includes = a.includes.len(),
                    "wrote amalgamation"
                );
                reports.push(a.report("written"));
            }

            let report = BuildReport {
                version: manifest.version.clone(),
                outputs: reports,
            };
            print_one(cli.json, true, report, |r| output_rows(&r.outputs))?;
        }
        Commands::Check {
            lib_version,
            header_only,
        } => {
            let manifest = with_version(manifest, lib_version.as_deref());
            let outputs = amalgamate_all(&manifest, &cli.root, *header_only)?;

            let mut reports = Vec::new();
            for a in &outputs {
                let status = compare_with_disk(&cli.root.join(&a.output), &a.text)?;
                if status != "up_to_date" {
                    tracing::warn!(output = %a.output.display(), status, "output is not up to date");
                }
                reports.push(a.report(status));
            }

            let all_ok = reports.iter().all(|r| r.status == "up_to_date");
            let report = CheckReport {
                overall: if all_ok { "ok" } else { "stale" }.to_string(),
                outputs: reports,
            };
            print_one(cli.json, all_ok, report, |r| {
                let mut rows = vec![format!("check: {}", r.overall)];
                rows.extend(output_rows(&r.outputs));
                rows
            })?;
            if !all_ok {
                std::process::exit(1);
            }
        }
        _ => return Ok(false),
    }

    Ok(true)
}
