use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use voxnoise::{
    config::{NoiseConfig, Seed},
    logger::init_logger,
    preview::{render2, render3_slice, PreviewOptions},
};

#[derive(Parser)]
#[command(name = "voxnoise")]
#[command(version, about = "Seeded simplex noise for voxel terrain")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct NoiseArgs {
    /// JSON noise config. Flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Numeric world seed
    #[arg(long, conflicts_with = "seed_text")]
    seed: Option<u64>,

    /// World name to hash into a seed
    #[arg(long)]
    seed_text: Option<String>,

    #[arg(long)]
    frequency: Option<f64>,

    #[arg(long)]
    octaves: Option<u32>,

    #[arg(long)]
    persistence: Option<f64>,

    #[arg(long)]
    lacunarity: Option<f64>,
}

impl NoiseArgs {
    fn resolve(self) -> Result<NoiseConfig> {
        let mut config = match &self.config {
            Some(path) => NoiseConfig::load(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => NoiseConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Seed::Number(seed);
        }
        if let Some(text) = self.seed_text {
            config.seed = Seed::Text(text);
        }
        if let Some(frequency) = self.frequency {
            config.frequency = frequency;
        }
        if let Some(octaves) = self.octaves {
            config.octaves.octaves = octaves;
        }
        if let Some(persistence) = self.persistence {
            config.octaves.persistence = persistence;
        }
        if let Some(lacunarity) = self.lacunarity {
            config.octaves.lacunarity = lacunarity;
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a grayscale PNG of the noise field
    Preview {
        #[command(flatten)]
        noise: NoiseArgs,

        #[arg(long, default_value = "512")]
        width: u32,

        #[arg(long, default_value = "512")]
        height: u32,

        /// Render a slice of 3D noise at this height instead of 2D noise
        #[arg(long)]
        z: Option<f64>,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// Print the fractal noise value at a world position
    Sample {
        #[command(flatten)]
        noise: NoiseArgs,

        #[arg(allow_hyphen_values = true)]
        x: f64,

        #[arg(allow_hyphen_values = true)]
        y: f64,

        #[arg(allow_hyphen_values = true)]
        z: Option<f64>,
    },
}

fn main() -> Result<()> {
    init_logger();
    let cli = Cli::parse();

    match cli.command {
        Commands::Preview { noise, width, height, z, output } => {
            let config = noise.resolve()?;
            let generator = config.generator();
            log::info!("Rendering seed {} ({:?})", generator.seed_value(), config.seed);
            let options = PreviewOptions::new(width, height, config);
            let preview = match z {
                Some(z) => render3_slice(&generator, &options, z)?,
                None => render2(&generator, &options)?,
            };
            preview.save(&output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
        }
        Commands::Sample { noise, x, y, z } => {
            let config = noise.resolve()?;
            let generator = config.generator();
            let value = match z {
                Some(z) => config.sample3(&generator, x, y, z),
                None => config.sample2(&generator, x, y),
            };
            println!("{value}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use voxnoise::Octaves;

    use super::*;

    fn parse(args: &[&str]) -> Commands {
        Cli::try_parse_from(args).unwrap().command
    }

    fn sample_args(command: Commands) -> (NoiseArgs, f64, f64, Option<f64>) {
        match command {
            Commands::Sample { noise, x, y, z } => (noise, x, y, z),
            Commands::Preview { .. } => panic!("expected sample"),
        }
    }

    fn write_config(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("voxnoise-{}-{name}.json", std::process::id()));
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn flags_without_config_override_defaults() {
        let (noise, x, y, z) = sample_args(parse(&[
            "voxnoise", "sample", "--seed", "7", "--octaves", "2", "1.5", "-2.5",
        ]));
        assert_eq!((x, y, z), (1.5, -2.5, None));
        let config = noise.resolve().unwrap();
        assert_eq!(config.seed, Seed::Number(7));
        assert_eq!(config.frequency, NoiseConfig::default().frequency);
        assert_eq!(config.octaves(), Octaves::new(2, 0.5, 2.0));
    }

    #[test]
    fn flags_override_config_file_fields() {
        let path = write_config(
            "override",
            r#"{ "seed": "spawn", "frequency": 0.2, "octaves": 6, "persistence": 0.4 }"#,
        );
        let path_arg = path.to_string_lossy().into_owned();
        let (noise, ..) = sample_args(parse(&[
            "voxnoise", "sample", "--config", &path_arg, "--seed", "9", "--persistence", "0.6", "0", "0", "3",
        ]));
        let config = noise.resolve().unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.seed, Seed::Number(9));
        assert_eq!(config.frequency, 0.2);
        assert_eq!(config.octaves(), Octaves::new(6, 0.6, 2.0));
    }

    #[test]
    fn text_seed_flag_keeps_other_config_fields() {
        let path = write_config("plain", r#"{ "seed": 3, "lacunarity": 3.0 }"#);
        let path_arg = path.to_string_lossy().into_owned();
        let preview = parse(&["voxnoise", "preview", "--config", &path_arg, "--seed-text", "spawn", "-o", "out.png"]);
        let Commands::Preview { noise, width, height, z, output } = preview else {
            panic!("expected preview");
        };
        let config = noise.resolve().unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!((width, height, z), (512, 512, None));
        assert_eq!(output, PathBuf::from("out.png"));
        assert_eq!(config.seed, Seed::from("spawn"));
        assert_eq!(config.octaves(), Octaves::new(4, 0.5, 3.0));
    }

    #[test]
    fn numeric_and_text_seeds_conflict() {
        let result = Cli::try_parse_from(["voxnoise", "sample", "--seed", "1", "--seed-text", "a", "0", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn missing_config_file_fails_to_resolve() {
        let (noise, ..) = sample_args(parse(&[
            "voxnoise", "sample", "--config", "/definitely/not/here/noise.json", "0", "0",
        ]));
        assert!(noise.resolve().is_err());
    }
}
