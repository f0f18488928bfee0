//! CLI command for the packing run

use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{DISK, LOOKING_GLASS, PACKAGE, print_done, print_step, simple_bar};
use crate::pack::{PackPhase, pack_dependencies, pack_dependencies_with_progress};

pub fn execute(root: &Path, progress: bool) -> anyhow::Result<()> {
    let started = Instant::now();

    if !progress {
        let summary = pack_dependencies(root)?;
        println!("Wrote {}", summary.archive_path.display());
        return Ok(());
    }

    print_step(1, 3, LOOKING_GLASS, "Relocating dependency directories...");
    print_step(2, 3, PACKAGE, "Compressing cache...");

    let pb = simple_bar(0, "Compressing");
    let summary = pack_dependencies_with_progress(root, &|update| match update.phase {
        PackPhase::Compressing => {
            pb.set_length(update.total as u64);
            pb.set_position(update.current as u64);
            if let Some(name) = &update.current_file {
                pb.set_message(name.clone());
            }
        }
        PackPhase::WritingManifests => {
            pb.set_message("writing manifests".to_string());
        }
        _ => {}
    })?;
    pb.finish_and_clear();

    print_step(
        3,
        3,
        DISK,
        &format!("Wrote {}", summary.archive_path.display()),
    );
    println!(
        "  {} files, {} symlinks, {} empty directories",
        summary.files_written, summary.symlinks_recorded, summary.empty_dirs_recorded
    );
    print_done(started.elapsed());

    Ok(())
}
