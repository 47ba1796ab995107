//! Generate command implementation.
//!
//! Writes one avatar file per seed, in SVG, PNG or JSON form.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{AcidError, Result};
use crate::manifest::{Manifest, OutputFormat, MAX_SIZE};
use crate::output::{display_path, plural, Printer};
use crate::render::{write_png, write_svg, RasterRenderer, RenderOptions};
use crate::types::{Pattern, Seed};

/// Generate avatar files for one or more seeds
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Seeds to generate avatars for
    pub seeds: Vec<String>,

    /// Read more seeds from a file, one per line
    #[arg(long)]
    pub seeds_file: Option<PathBuf>,

    /// Output format (default from acid.yaml, else svg)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Avatar size in pixels
    #[arg(long)]
    pub size: Option<u32>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Directory containing acid.yaml
    #[arg(long, default_value = ".")]
    pub project: PathBuf,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::discover(&args.project)?;
    let seeds = collect_seeds(&args)?;

    if seeds.is_empty() {
        return Err(AcidError::Input {
            message: "No seeds given".to_string(),
            help: Some("Pass seeds as arguments or use --seeds-file".to_string()),
        });
    }

    let format = args.format.unwrap_or(manifest.format);
    let output = args.output.clone().unwrap_or_else(|| manifest.output.clone());
    let mut options = manifest.render_options()?;
    if let Some(size) = args.size {
        if !(1..=MAX_SIZE).contains(&size) {
            return Err(AcidError::Input {
                message: format!("--size must be between 1 and {}, got {}", MAX_SIZE, size),
                help: None,
            });
        }
        options.size = size;
    }

    if !output.exists() {
        fs::create_dir_all(&output).map_err(|e| AcidError::Io {
            path: output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let mut seen = HashSet::new();
    let mut written = HashSet::new();
    for seed in &seeds {
        if !seen.insert(seed.as_str()) {
            printer.warning("Skipping", &format!("{:?} (repeated seed)", seed.as_str()));
            continue;
        }

        let name = unique_name(seed.slug(), &mut written);

        let pattern = seed.pattern();
        let path = output.join(format!("{}.{}", name, format.extension()));
        write_avatar(&pattern, &name, &path, format, options)?;

        printer.status(
            "Generated",
            &format!(
                "{} ({}) -> {}",
                name,
                plural(pattern.len(), "shape", "shapes"),
                display_path(&path)
            ),
        );
    }

    printer.status(
        "Finished",
        &format!(
            "{} in {}",
            plural(written.len(), "avatar", "avatars"),
            display_path(&output)
        ),
    );

    Ok(())
}

/// Claim `slug` in `taken`, adding a numeric suffix if it is already used.
fn unique_name(slug: String, taken: &mut HashSet<String>) -> String {
    let mut name = slug.clone();
    let mut n = 2;
    while !taken.insert(name.clone()) {
        name = format!("{}-{}", slug, n);
        n += 1;
    }
    name
}

/// Gather seeds from arguments, then from the seeds file.
fn collect_seeds(args: &GenerateArgs) -> Result<Vec<Seed>> {
    let mut seeds: Vec<Seed> = args.seeds.iter().map(|s| Seed::from(s.as_str())).collect();

    if let Some(path) = &args.seeds_file {
        seeds.extend(read_seeds_file(path)?);
    }

    Ok(seeds)
}

/// Read one seed per line, skipping blank lines.
pub fn read_seeds_file(path: &Path) -> Result<Vec<Seed>> {
    let bytes = fs::read(path).map_err(|e| AcidError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read seeds: {}", e),
    })?;

    let content = String::from_utf8(bytes).map_err(|e| AcidError::Input {
        message: format!("{} is not valid UTF-8: {}", path.display(), e),
        help: Some("Seeds must be text".to_string()),
    })?;

    Ok(content
        .lines()
        .filter(|line| !line.is_empty())
        .map(Seed::from)
        .collect())
}

/// Write a single avatar in the requested format.
fn write_avatar(
    pattern: &Pattern,
    name: &str,
    path: &Path,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<()> {
    match format {
        OutputFormat::Svg => write_svg(pattern, path, options),
        OutputFormat::Png => {
            let rendered = RasterRenderer::new(options).render(name, pattern);
            write_png(&rendered, path)
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(pattern).map_err(|e| AcidError::Render {
                message: format!("Failed to serialize {}: {}", name, e),
                help: None,
            })?;
            fs::write(path, json).map_err(|e| AcidError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to write JSON: {}", e),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(seeds: &[&str], output: &Path, format: OutputFormat) -> GenerateArgs {
        GenerateArgs {
            seeds: seeds.iter().map(|s| s.to_string()).collect(),
            seeds_file: None,
            format: Some(format),
            size: Some(16),
            output: Some(output.to_path_buf()),
            project: output.to_path_buf(),
        }
    }

    #[test]
    fn test_generate_svg() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");

        run(args(&["alice-1700000000000"], &out, OutputFormat::Svg), &Printer::quiet()).unwrap();

        let content = fs::read_to_string(out.join("alice-1700000000000.svg")).unwrap();
        assert!(content.contains(r#"width="16""#));
        assert_eq!(content.matches("opacity=\"0.8\"").count(), 4);
    }

    #[test]
    fn test_generate_png() {
        let dir = tempdir().unwrap();

        run(args(&["bob-1"], dir.path(), OutputFormat::Png), &Printer::quiet()).unwrap();

        let img = image::open(dir.path().join("bob-1.png")).unwrap();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 16);
    }

    #[test]
    fn test_generate_json() {
        let dir = tempdir().unwrap();

        run(args(&["carol-7"], dir.path(), OutputFormat::Json), &Printer::quiet()).unwrap();

        let content = fs::read_to_string(dir.path().join("carol-7.json")).unwrap();
        let pattern: Pattern = serde_json::from_str(&content).unwrap();
        assert_eq!(pattern, Pattern::generate("carol-7"));
    }

    #[test]
    fn test_generate_empty_seed() {
        let dir = tempdir().unwrap();

        run(args(&[""], dir.path(), OutputFormat::Svg), &Printer::quiet()).unwrap();

        assert!(dir.path().join("empty.svg").exists());
    }

    #[test]
    fn test_generate_requires_seeds() {
        let dir = tempdir().unwrap();
        let result = run(args(&[], dir.path(), OutputFormat::Svg), &Printer::quiet());
        assert!(result.is_err());
    }

    #[test]
    fn test_generate_rejects_bad_size() {
        let dir = tempdir().unwrap();
        let mut a = args(&["x"], dir.path(), OutputFormat::Png);
        a.size = Some(0);
        assert!(run(a, &Printer::quiet()).is_err());

        let mut a = args(&["x"], dir.path(), OutputFormat::Png);
        a.size = Some(MAX_SIZE + 1);
        assert!(run(a, &Printer::quiet()).is_err());
    }

    #[test]
    fn test_generate_uses_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("acid.yaml"), "format: png\nsize: 8").unwrap();

        let a = GenerateArgs {
            seeds: vec!["dave-3".to_string()],
            seeds_file: None,
            format: None,
            size: None,
            output: Some(dir.path().join("pngs")),
            project: dir.path().to_path_buf(),
        };
        run(a, &Printer::quiet()).unwrap();

        let img = image::open(dir.path().join("pngs").join("dave-3.png")).unwrap();
        assert_eq!(img.width(), 8);
    }

    #[test]
    fn test_generate_from_seeds_file() {
        let dir = tempdir().unwrap();
        let list = dir.path().join("seeds.txt");
        fs::write(&list, "erin-1\n\nfrank-2\r\n").unwrap();

        let mut a = args(&[], dir.path(), OutputFormat::Svg);
        a.seeds_file = Some(list);
        run(a, &Printer::quiet()).unwrap();

        assert!(dir.path().join("erin-1.svg").exists());
        assert!(dir.path().join("frank-2.svg").exists());
    }

    #[test]
    fn test_read_seeds_file_rejects_binary() {
        let dir = tempdir().unwrap();
        let list = dir.path().join("seeds.bin");
        fs::write(&list, [0xff, 0xfe, 0x00]).unwrap();

        let err = read_seeds_file(&list).unwrap_err();
        assert!(matches!(err, AcidError::Input { .. }));
    }

    #[test]
    fn test_distinct_seeds_get_distinct_files() {
        let dir = tempdir().unwrap();
        let seeds = ["zoë-1", "zoé-1", "李-1", "王-1", "a b", "a_b"];

        run(args(&seeds, dir.path(), OutputFormat::Json), &Printer::quiet()).unwrap();

        let files = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(files, seeds.len());

        for seed in seeds {
            let path = dir.path().join(format!("{}.json", Seed::from(seed).slug()));
            let pattern: Pattern = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
            assert_eq!(pattern, Pattern::generate(seed));
        }
    }

    #[test]
    fn test_repeated_seed_written_once() {
        let dir = tempdir().unwrap();

        run(args(&["gail-5", "gail-5"], dir.path(), OutputFormat::Svg), &Printer::quiet()).unwrap();

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
        assert!(dir.path().join("gail-5.svg").exists());
    }

    #[test]
    fn test_unique_name_suffixes_taken_slugs() {
        let mut taken = HashSet::new();
        assert_eq!(unique_name("empty".to_string(), &mut taken), "empty");
        assert_eq!(unique_name("empty".to_string(), &mut taken), "empty-2");
        assert_eq!(unique_name("empty".to_string(), &mut taken), "empty-3");
    }
}
