//! Install command implementation
//!
//! The installation flow:
//! 1. Load package definitions (fatal when missing)
//! 2. Resolve platform and package, prompting for whatever was omitted
//! 3. Decide add-vs-update mode when an installation already exists
//! 4. Back up the existing config root on a forced update
//! 5. Run the installer and report every (path, action) pair

use std::path::Path;

use inquire::{Confirm, Select};

use crate::backup;
use crate::cli::InstallArgs;
use crate::digest_store::DigestStore;
use crate::error::Result;
use crate::installer::{InstalledItem, Installer};
use crate::merge::MergeAction;
use crate::packages::{PACKAGES_FILE_NAME, PackageContents, PackagesDoc};
use crate::platform::Platform;
use crate::progress::ProgressDisplay;
use crate::ui;

/// Run the install command
pub fn run(args: InstallArgs) -> Result<()> {
    ui::header("Skillpack Installer");

    let packages = PackagesDoc::load(&args.templates.join(PACKAGES_FILE_NAME))?;
    let target_dir = std::path::absolute(&args.target)?;

    let platform = match &args.platform {
        Some(p) => p.parse::<Platform>()?,
        None => prompt_platform(&target_dir)?,
    };
    ui::success(&format!("Platform: {}", platform));

    let has_existing = platform.config_root(&target_dir).exists();

    let mut force_update = args.update;
    if has_existing && !args.update && !args.yes {
        force_update = prompt_install_mode(platform)?;
    }
    if has_existing {
        if force_update {
            ui::info("Mode: Update (overwrite existing files)");
        } else {
            ui::info("Mode: Add (keep customized files)");
        }
    }

    let package_name = match &args.package {
        Some(name) => name.clone(),
        None => prompt_package(&packages)?,
    };
    ui::success(&format!("Package: {}", package_name));

    let contents = packages.resolve(&package_name)?;
    print_summary(&contents, &target_dir);

    if args.dry_run {
        ui::warning("DRY RUN - No changes will be made");
    }

    if !args.dry_run && !args.yes && !confirm_install()? {
        ui::info("Installation cancelled");
        return Ok(());
    }

    if has_existing && force_update && !args.no_backup && !args.dry_run {
        if let Some(backup_path) = backup::backup_existing(&target_dir, platform)? {
            ui::info(&format!("Backup created at {}", backup_path.display()));
        }
    }

    let store = DigestStore::new(&platform.config_root(&target_dir));
    let installer = Installer::new(
        args.templates.clone(),
        target_dir.clone(),
        platform,
        &store,
        args.dry_run,
        force_update,
    );

    println!();
    println!("{}", ui::bold("Installing..."));

    let progress = ProgressDisplay::new(contents.total() as u64, args.dry_run);
    let results = match installer.install(&contents, &progress) {
        Ok(results) => {
            progress.finish();
            results
        }
        Err(e) => {
            progress.abandon();
            return Err(e);
        }
    };

    print_results(&results);

    println!();
    ui::success(&ui::bold("Installation complete!"));
    println!(
        "\nFiles installed to: {}",
        platform.config_root(&target_dir).display()
    );
    print_next_steps(platform);

    Ok(())
}

/// Pick a platform interactively, defaulting to a detected installation
fn prompt_platform(target_dir: &Path) -> Result<Platform> {
    let detected = Platform::detect(target_dir);
    let starting_cursor = detected
        .and_then(|d| Platform::ALL.iter().position(|p| *p == d))
        .unwrap_or(0);

    let names: Vec<&str> = Platform::ALL.iter().map(|p| p.display_name()).collect();
    let choice = Select::new("Select platform:", names)
        .with_starting_cursor(starting_cursor)
        .prompt()?;

    Ok(Platform::ALL
        .into_iter()
        .find(|p| p.display_name() == choice)
        .unwrap_or(Platform::Claude))
}

/// Pick a package interactively, listing descriptions
fn prompt_package(packages: &PackagesDoc) -> Result<String> {
    let items: Vec<String> = packages
        .names()
        .iter()
        .map(|name| {
            let description = packages.description(name).unwrap_or("");
            format!("{} - {}", name, description)
        })
        .collect();

    let starting_cursor = packages
        .names()
        .iter()
        .position(|name| *name == "standard")
        .unwrap_or(0);

    let choice = Select::new("Select package:", items)
        .with_starting_cursor(starting_cursor)
        .prompt()?;

    let name = choice.split_once(" - ").map(|(name, _)| name.to_string());
    Ok(name.unwrap_or(choice))
}

/// Choose between add mode and forced update over an existing installation
fn prompt_install_mode(platform: Platform) -> Result<bool> {
    ui::warning(&format!(
        "Existing {} installation detected ({})",
        platform,
        platform.config_dir()
    ));

    let add = "Add - add new files, keep customized files";
    let update = "Update - overwrite all files with latest versions";
    let choice = Select::new("Choose action:", vec![add, update]).prompt()?;

    Ok(choice == update)
}

fn confirm_install() -> Result<bool> {
    Ok(Confirm::new("Proceed with installation?")
        .with_default(false)
        .prompt()?)
}

fn print_summary(contents: &PackageContents, target_dir: &Path) {
    println!();
    println!("{}", ui::bold("Installation summary:"));
    println!("  Skills:    {}", contents.skills.len());
    println!("  Agents:    {}", contents.agents.len());
    println!("  Workflows: {}", contents.workflows.len());
    println!("  Commands:  {}", contents.commands.len());
    println!("  Target:    {}", target_dir.display());
}

fn print_results(results: &[InstalledItem]) {
    println!();
    println!("{}", ui::bold("Results:"));

    let created = results
        .iter()
        .filter(|r| r.action == MergeAction::Created)
        .count();
    let updated = results.iter().filter(|r| r.action.is_update()).count();
    let skipped: Vec<&InstalledItem> = results
        .iter()
        .filter(|r| matches!(r.action, MergeAction::Skipped { .. }))
        .collect();

    if created > 0 {
        ui::success(&format!("Created: {} files", created));
    }
    if updated > 0 {
        ui::info(&format!("Updated: {} files", updated));
    }
    if !skipped.is_empty() {
        ui::warning(&format!("Skipped (customized): {} files", skipped.len()));
        for item in skipped {
            println!("  - {}: {}", item.path, item.action);
        }
    }
}

fn print_next_steps(platform: Platform) {
    println!("\n{}", ui::bold("Next steps:"));
    match platform {
        Platform::Claude => {
            println!("  1. Start Claude Code in your project");
            println!("  2. Use /create-crew to create your first crew");
        }
        Platform::OpenCode => {
            println!("  1. Start OpenCode in your project");
            println!("  2. Use /crew create to create your first crew");
        }
    }
}
