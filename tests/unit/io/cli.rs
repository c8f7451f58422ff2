//! Tests for command-line interface parsing and file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pixmosaic::MosaicError;
    use pixmosaic::aggregate::sampling::HexSampling;
    use pixmosaic::io::cli::{Cli, FileProcessor, Mode, Sampling, data_url_path, output_path};
    use pixmosaic::io::configuration::{DEFAULT_BLOCK_SIZE, DEFAULT_HEX_RADIUS};
    use pixmosaic::io::image::{load_raster, save_raster};
    use pixmosaic::raster::Raster;
    use pixmosaic::render::mosaic::MosaicParameters;
    use std::path::{Path, PathBuf};

    fn write_png(path: &Path) {
        let raster = Raster::filled(12, 9, [40, 80, 120, 255]).unwrap_or_else(|e| {
            unreachable!("solid raster must be valid: {e}");
        });
        assert!(save_raster(raster, path).is_ok());
    }

    // Tests CLI parsing with only required target file argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "test.png"]);

        assert_eq!(cli.target, PathBuf::from("test.png"));
        assert_eq!(cli.mode, Mode::Square);
        assert_eq!(cli.block_size, DEFAULT_BLOCK_SIZE);
        assert_eq!(cli.hex_radius, DEFAULT_HEX_RADIUS);
        assert_eq!(cli.sampling, Sampling::Center);
        assert_eq!(cli.seed, None);
        assert!(!cli.quiet && !cli.data_url && !cli.verbose);
    }

    // Tests CLI parsing with all available arguments
    // Verified by renaming long flags
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "input",
            "--mode",
            "hex",
            "--block-size",
            "7",
            "--hex-radius",
            "4",
            "--sampling",
            "area",
            "--seed",
            "123",
            "--data-url",
            "--quiet",
            "--no-skip",
            "--verbose",
        ]);

        assert_eq!(cli.mode, Mode::Hex);
        assert_eq!(cli.block_size, 7);
        assert_eq!(cli.hex_radius, 4);
        assert_eq!(cli.sampling, Sampling::Area);
        assert_eq!(cli.seed, Some(123));
        assert!(cli.data_url && cli.quiet && cli.verbose);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
    }

    // Tests short flag parsing
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "x.png", "-m", "hex", "-r", "3", "-s", "9", "-b", "2"]);
        assert_eq!(cli.mode, Mode::Hex);
        assert_eq!(cli.hex_radius, 3);
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.block_size, 2);
    }

    // Tests parameters follow the selected mode
    // Verified by always building square parameters
    #[test]
    fn test_cli_parameters() {
        let square = Cli::parse_from(["program", "x.png", "-b", "6"]);
        assert!(matches!(
            square.parameters(),
            Ok(MosaicParameters::Square { block_size: 6 })
        ));

        let hex = Cli::parse_from(["program", "x.png", "-m", "hex", "--sampling", "area"]);
        assert!(matches!(
            hex.parameters(),
            Ok(MosaicParameters::Hexagonal {
                hex_radius: 10,
                sampling: HexSampling::AreaAverage
            })
        ));

        let large = Cli::parse_from(["program", "x.png", "-b", "5000"]);
        assert!(matches!(
            large.parameters(),
            Ok(MosaicParameters::Square { block_size: 5000 })
        ));

        let zero = Cli::parse_from(["program", "x.png", "-b", "0"]);
        assert!(matches!(
            zero.parameters(),
            Err(MosaicError::InvalidParameter { .. })
        ));
    }

    // Tests non-numeric sizes are rejected by the parser
    // Verified by parsing sizes as strings
    #[test]
    fn test_cli_rejects_non_numeric_size() {
        assert!(Cli::try_parse_from(["program", "x.png", "-b", "big"]).is_err());
        assert!(Cli::try_parse_from(["program", "x.png", "-r", "-2"]).is_err());
        assert!(Cli::try_parse_from(["program", "x.png", "-m", "triangle"]).is_err());
        assert!(Cli::try_parse_from(["program", "x.png", "--sampling", "median"]).is_err());
    }

    // Tests output naming next to the input
    // Verified by dropping the suffix
    #[test]
    fn test_output_paths() {
        assert_eq!(
            output_path(Path::new("dir/cat.png")),
            PathBuf::from("dir/cat_mosaic.png")
        );
        assert_eq!(
            data_url_path(Path::new("cat.png")),
            PathBuf::from("cat_mosaic.txt")
        );
    }

    // Tests file collection filters, skips outputs and sorts
    // Verified by including previously written outputs
    #[test]
    fn test_collect_files_from_directory() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory must be creatable");
        };
        write_png(&dir.path().join("b.png"));
        write_png(&dir.path().join("a.png"));
        write_png(&dir.path().join("a_mosaic.png"));
        assert!(std::fs::write(dir.path().join("notes.txt"), "x").is_ok());

        let cli = Cli::parse_from([
            PathBuf::from("program"),
            dir.path().to_path_buf(),
            PathBuf::from("--quiet"),
        ]);
        let processor = FileProcessor::new(cli);
        let Ok(files) = processor.collect_files() else {
            unreachable!("directory must be readable");
        };
        // a.png is skipped because its output already exists
        assert_eq!(files, vec![dir.path().join("b.png")]);
    }

    // Tests an explicit output file target is never mosaiced again
    // Verified by checking the suffix only for directory entries
    #[test]
    fn test_collect_files_skips_output_file_target() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory must be creatable");
        };
        let output = dir.path().join("cat_mosaic.png");
        write_png(&output);

        for flags in [vec!["-q"], vec!["-q", "--no-skip"]] {
            let mut args = vec![PathBuf::from("program"), output.clone()];
            args.extend(flags.into_iter().map(PathBuf::from));
            let processor = FileProcessor::new(Cli::parse_from(args));
            assert!(matches!(processor.collect_files(), Ok(files) if files.is_empty()));
        }
        assert!(!dir.path().join("cat_mosaic_mosaic.png").exists());
    }

    // Tests invalid targets are rejected
    // Verified by accepting any file extension
    #[test]
    fn test_collect_files_rejects_bad_target() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory must be creatable");
        };
        let text = dir.path().join("notes.txt");
        assert!(std::fs::write(&text, "x").is_ok());

        let cli = Cli::parse_from([PathBuf::from("program"), text, PathBuf::from("-q")]);
        assert!(FileProcessor::new(cli).collect_files().is_err());

        let missing = dir.path().join("missing");
        let cli = Cli::parse_from([PathBuf::from("program"), missing, PathBuf::from("-q")]);
        assert!(FileProcessor::new(cli).collect_files().is_err());
    }

    // Tests end-to-end processing writes the mosaic and data URL
    // Verified by skipping the data URL sidecar
    #[test]
    fn test_process_writes_outputs() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory must be creatable");
        };
        let input = dir.path().join("photo.png");
        write_png(&input);

        let cli = Cli::parse_from([
            PathBuf::from("program"),
            input.clone(),
            PathBuf::from("--quiet"),
            PathBuf::from("--data-url"),
            PathBuf::from("--seed"),
            PathBuf::from("4"),
        ]);
        assert!(FileProcessor::new(cli).process().is_ok());

        let Ok(mosaic) = load_raster(output_path(&input)) else {
            unreachable!("mosaic output must exist");
        };
        assert_eq!(mosaic.dimensions(), (12, 9));
        assert_eq!(mosaic.pixel(5, 5), Some([40, 80, 120, 255]));

        let url = std::fs::read_to_string(data_url_path(&input)).unwrap_or_default();
        assert!(url.starts_with("data:image/png;base64,"));

        // Second run skips the existing output
        let cli = Cli::parse_from([PathBuf::from("program"), input, PathBuf::from("-q")]);
        assert!(matches!(FileProcessor::new(cli).collect_files(), Ok(files) if files.is_empty()));
    }
}
