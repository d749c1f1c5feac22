//! Plan stage: context validation and per-OS operation ordering.

use std::path::{Path, PathBuf};

use serde_json::json;

use crate::constants::{
    DESKTOP_ENTRY_EXT, ICON_FILE, MAC_BUNDLE_BIN_DIR, MANAGE_PACKAGES_ARG,
    MANAGE_PACKAGES_SHORTCUT_NAME, REDIST_INSTALL_ARGS, REDIST_UNINSTALL_ARGS, SHORTCUT_EXT,
    UNINSTALL_ONLY_ARG, UNINSTALL_SHORTCUT_NAME, UPDATER_ARG, UPDATE_SHORTCUT_NAME,
};
use crate::logging::audit::{AuditCtx, AuditMode};
use crate::logging::{AuditSink, FactsEmitter, StageLogger, TS_ZERO};
use crate::types::errors::{Error, Result};
use crate::types::ids::{op_id, plan_id};
use crate::types::{DesktopEntry, Operation, OsTag, Plan, PlatformContext, SafePath};

use super::errors::ApiError;

/// Validate the context, build the plan, and emit a `plan` fact per
/// operation. The operation ordering itself is a pure function of the
/// context.
pub(super) fn build<E: FactsEmitter, A: AuditSink>(
    api: &super::Gangway<E, A>,
    ctx: &PlatformContext,
) -> std::result::Result<Plan, ApiError> {
    let plan = build_operations(ctx).map_err(ApiError::from)?;

    let pid_uuid = plan_id(&plan);
    let tctx = AuditCtx::new(
        &api.facts,
        pid_uuid.to_string(),
        TS_ZERO.to_string(),
        AuditMode {
            dry_run: true,
            redact: true,
        },
    );
    let slog = StageLogger::new(&tctx);
    for (idx, op) in plan.operations.iter().enumerate() {
        slog.plan()
            .op(op_id(&pid_uuid, op, idx).to_string())
            .path(op.artifact().display().to_string())
            .field("kind", json!(op.kind()))
            .emit_success();
    }

    Ok(plan)
}

/// Pure construction of the per-OS operation ordering.
fn build_operations(ctx: &PlatformContext) -> Result<Plan> {
    let os = OsTag::parse(&ctx.os_tag)?;
    if !ctx.target_dir.is_absolute() {
        return Err(Error::config(format!(
            "target dir {} is not absolute",
            ctx.target_dir.display()
        )));
    }

    let mut operations: Vec<Operation> = Vec::new();
    match os {
        OsTag::Windows => {
            let run_program = ctx.target_dir.join(format!("{}.exe", ctx.product_name));

            // Launch shortcut first: a failed redistributable must leave it
            // intact and independently rollback-able.
            operations.push(shortcut(
                &ctx.registry.start_menu,
                &ctx.display_name,
                run_program.clone(),
                vec![],
            )?);

            if let Some(redist) = &ctx.redistributable {
                operations.push(Operation::RunProcess {
                    program: ctx.target_dir.join(redist),
                    arguments: strvec(REDIST_INSTALL_ARGS),
                    undo_arguments: Some(strvec(REDIST_UNINSTALL_ARGS)),
                });
            }

            let tool = ctx.target_dir.join(format!("{}.exe", ctx.maintenance_tool));
            if ctx.offline_only {
                operations.push(shortcut(
                    &ctx.registry.start_menu,
                    UNINSTALL_SHORTCUT_NAME,
                    tool,
                    vec![],
                )?);
            } else {
                operations.push(shortcut(
                    &ctx.registry.start_menu,
                    &ctx.maintenance_tool,
                    tool.clone(),
                    vec![],
                )?);
                operations.push(shortcut(
                    &ctx.registry.start_menu,
                    MANAGE_PACKAGES_SHORTCUT_NAME,
                    tool.clone(),
                    vec![MANAGE_PACKAGES_ARG.to_string()],
                )?);
                operations.push(shortcut(
                    &ctx.registry.start_menu,
                    UPDATE_SHORTCUT_NAME,
                    tool.clone(),
                    vec![UPDATER_ARG.to_string()],
                )?);
                operations.push(shortcut(
                    &ctx.registry.start_menu,
                    UNINSTALL_SHORTCUT_NAME,
                    tool,
                    vec![UNINSTALL_ONLY_ARG.to_string()],
                )?);
            }

            if ctx.desktop_shortcut {
                operations.push(shortcut(
                    &ctx.registry.desktop,
                    &ctx.display_name,
                    run_program,
                    vec![],
                )?);
            }
        }
        OsTag::MacOs => {
            let run_program = ctx
                .target_dir
                .join(MAC_BUNDLE_BIN_DIR)
                .join(&ctx.product_name);
            let path = SafePath::from_rooted(
                &ctx.registry.applications,
                Path::new(&format!("{}.launch", ctx.product_name)),
            )?;
            operations.push(Operation::WriteFile {
                path,
                contents: format!("{}\n", run_program.display()),
            });
        }
        OsTag::X11 => {
            let run_program = ctx.target_dir.join(&ctx.product_name);
            let path = SafePath::from_rooted(
                &ctx.registry.applications,
                Path::new(&format!("{}.{DESKTOP_ENTRY_EXT}", ctx.product_name)),
            )?;
            operations.push(Operation::CreateDesktopEntry {
                path,
                entry: DesktopEntry {
                    name: ctx.display_name.clone(),
                    exec: run_program,
                    icon: ctx.target_dir.join(ICON_FILE),
                    terminal: false,
                },
            });
        }
    }

    Ok(Plan { operations })
}

fn shortcut(
    registry_dir: &Path,
    name: &str,
    target: PathBuf,
    arguments: Vec<String>,
) -> Result<Operation> {
    let link = SafePath::from_rooted(registry_dir, Path::new(&format!("{name}.{SHORTCUT_EXT}")))?;
    Ok(Operation::CreateShortcut {
        link,
        target,
        arguments,
    })
}

fn strvec(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| (*s).to_string()).collect()
}
