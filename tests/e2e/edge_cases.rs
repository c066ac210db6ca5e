use super::*;

#[test]
fn missing_base_dir_fails_before_any_work() {
    let ctx = TestContext::new();
    let result = ctx.run(&["results", "--base-dir", "nope", "--delete-yes"]);

    assert_failure(&result);
    assert_stderr_contains(&result, "Path 'nope' does not exist");
    assert!(result.stdout.is_empty());
    assert!(!ctx.file_path("logfile.txt").exists());
}

#[test]
fn base_dir_must_be_a_directory() {
    let ctx = TestContext::new();
    ctx.write_file("build.sarif", WITH_RESULTS);

    let result = ctx.run(&["files", "--base-dir", "build.sarif"]);

    assert_failure(&result);
    assert_stderr_contains(&result, "is not a directory");
}

#[test]
fn default_base_dir_is_validated_too() {
    let ctx = TestContext::new();
    let result = ctx.run(&["results"]);

    assert_failure(&result);
    assert_stderr_contains(&result, "Path 'build' does not exist");
}

#[test]
fn nothing_to_delete_does_not_prompt() {
    let ctx = TestContext::new();
    ctx.write_file("build/pkg/CMakeCache.txt", "");

    let result = ctx.run_with_input(&["results", "--delete"], "y\n");

    assert_success(&result);
    assert_eq!(result.stdout, "No result files found to delete\n");
}

#[test]
fn closed_stdin_aborts_delete() {
    let ctx = TestContext::with_build();
    let result = ctx.run_with_input(&["results", "--delete"], "");

    assert_success(&result);
    assert_output_contains(&result, "Aborted");
    ctx.assert_file_exists("build/pkg_b/clang_tidy.sarif");
}

#[test]
fn delete_skips_image_generation() {
    let ctx = TestContext::with_build();
    ctx.write_file("colcon-sarif.toml", "[images]\ntool = \"/not/a/real/tool\"\n");

    let result = ctx.run(&["results", "--delete-yes", "--gen-images"]);

    assert_success(&result);
    assert_output_contains(&result, "Deleted 2 files");
}

#[test]
fn failing_image_tool_fails_the_command() {
    let ctx = TestContext::with_build();
    ctx.write_file("colcon-sarif.toml", "[images]\ntool = \"/not/a/real/tool\"\n");

    let result = ctx.run(&["results", "--gen-images"]);

    assert_failure(&result);
    assert_stderr_contains(&result, "image tool /not/a/real/tool failed");
}

#[test]
fn malformed_config_is_reported() {
    let ctx = TestContext::with_build();
    ctx.write_file("colcon-sarif.toml", "[discovery\n");

    let result = ctx.run(&["results"]);

    assert_failure(&result);
    assert_stderr_contains(&result, "failed to load config file");
}

#[test]
fn delete_yes_removes_non_utf8_result_file() {
    let ctx = TestContext::with_build();
    fs::create_dir_all(ctx.file_path("build/pkg_c")).expect("create dir");
    fs::write(ctx.file_path("build/pkg_c/bin.sarif"), [0xff, 0xfe, 0x00]).expect("write bytes");

    let result = ctx.run(&["results", "--delete-yes"]);

    assert_success(&result);
    assert_output_contains(&result, "- build/pkg_c/bin.sarif");
    assert_output_contains(&result, "Deleted 3 files");
    ctx.assert_file_missing("build/pkg_c/bin.sarif");
    ctx.assert_file_contains("logfile.txt", "unreadable SARIF");
}

#[test]
#[cfg(unix)]
fn delete_yes_removes_dangling_symlink() {
    let ctx = TestContext::with_build();
    std::os::unix::fs::symlink(
        ctx.file_path("build/pkg_a/cleaned.sarif"),
        ctx.file_path("build/pkg_a/link.sarif"),
    )
    .expect("symlink");

    let result = ctx.run(&["results", "--delete-yes"]);

    assert_success(&result);
    assert_output_contains(&result, "- build/pkg_a/link.sarif");
    assert_output_contains(&result, "Deleted 3 files");
    assert!(fs::symlink_metadata(ctx.file_path("build/pkg_a/link.sarif")).is_err());
}
