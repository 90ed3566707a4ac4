use clap::Parser;
use std::path::PathBuf;
use tagmeta::application::{
    CheckManifestService, FindTagService, ListDeclarationsService, ResolveTagsService,
};
use tagmeta::cli::{
    format_check_report, format_declaration_list, format_tag_list, Cli, Commands,
};
use tagmeta::error::TagmetaError;
use tagmeta::infrastructure::FileSystemRepository;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn repository(manifest: Option<PathBuf>) -> Result<FileSystemRepository, TagmetaError> {
    match manifest {
        Some(path) => Ok(FileSystemRepository::new(path)),
        None => FileSystemRepository::discover(),
    }
}

fn run(cli: Cli) -> Result<(), TagmetaError> {
    let repo = repository(cli.manifest)?;

    match cli.command {
        Commands::Resolve { decl } => {
            let service = ResolveTagsService::new(repo);
            let tags = service.execute(&decl)?;
            println!("{}", format_tag_list(&tags));
            Ok(())
        }
        Commands::Find {
            decl,
            tag_type,
            all,
        } => {
            let service = FindTagService::new(repo);
            let tags = service.execute(&decl, &tag_type, all)?;
            println!("{}", format_tag_list(&tags));
            Ok(())
        }
        Commands::List => {
            let service = ListDeclarationsService::new(repo);
            let decls = service.execute()?;
            println!("{}", format_declaration_list(&decls));
            Ok(())
        }
        Commands::Check => {
            let service = CheckManifestService::new(repo);
            let report = service.execute()?;
            println!("{}", format_check_report(&report));
            Ok(())
        }
    }
}
