//! Integration tests for running whole plans.

use seqrun_config::{PlanDef, StepDef};
use seqrun_step_executor::{StepExecutionError, StepExecutor};

fn shell_step(step_id: &str, script: &str) -> StepDef {
  StepDef {
    step_id: step_id.to_string(),
    command: "sh".to_string(),
    args: vec!["-c".to_string(), script.to_string()],
    env: Default::default(),
    working_dir: None,
    timeout_ms: None,
  }
}

fn plan(steps: Vec<StepDef>) -> PlanDef {
  PlanDef {
    name: "test-plan".to_string(),
    steps,
  }
}

#[tokio::test]
async fn test_empty_plan() {
  let executor = StepExecutor::with_execution_id("exec-empty");

  let result = executor.execute_plan(&plan(vec![])).await.unwrap();

  assert_eq!(result.execution_id, "exec-empty");
  assert!(result.step_results.is_empty());
}

#[tokio::test]
async fn test_results_follow_plan_order() {
  let executor = StepExecutor::new();
  let plan = plan(vec![
    shell_step("one", "sleep 0.2; echo 1"),
    shell_step("two", "echo 2"),
    shell_step("three", "echo 3"),
  ]);

  let result = executor.execute_plan(&plan).await.unwrap();

  let ids: Vec<_> = result.step_results.iter().map(|r| r.step_id.as_str()).collect();
  let outputs: Vec<_> = result.step_results.iter().map(|r| r.stdout.trim()).collect();
  assert_eq!(ids, vec!["one", "two", "three"]);
  assert_eq!(outputs, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_steps_run_one_after_another() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  let mut first = shell_step("first", "sleep 0.2; echo first >> log");
  let mut second = shell_step("second", "echo second >> log");
  first.working_dir = Some(dir.path().to_path_buf());
  second.working_dir = Some(dir.path().to_path_buf());

  StepExecutor::new()
    .execute_plan(&plan(vec![first, second]))
    .await
    .unwrap();

  let log = std::fs::read_to_string(dir.path().join("log")).unwrap();
  assert_eq!(log, "first\nsecond\n");
}

#[tokio::test]
async fn test_failure_stops_later_steps() {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  let marker = dir.path().join("ran");

  let plan = plan(vec![
    shell_step("ok", "true"),
    shell_step("broken", "echo boom >&2; exit 1"),
    shell_step("after", &format!("touch '{}'", marker.display())),
  ]);

  let err = StepExecutor::new().execute_plan(&plan).await.unwrap_err();

  match err {
    StepExecutionError::NonZeroExit {
      step_id, stderr, ..
    } => {
      assert_eq!(step_id, "broken");
      assert_eq!(stderr.trim(), "boom");
    }
    other => panic!("unexpected error: {other}"),
  }
  assert!(!marker.exists(), "step after the failure must not run");
}

#[tokio::test]
async fn test_plan_from_json() {
  let plan = PlanDef::from_json_str(
    r#"{
      "name": "json",
      "steps": [
        { "step_id": "a", "command": "echo", "args": ["alpha"] },
        { "step_id": "b", "command": "echo", "args": ["beta"] }
      ]
    }"#,
  )
  .unwrap();
  plan.validate().unwrap();

  let result = StepExecutor::new().execute_plan(&plan).await.unwrap();

  let json = serde_json::to_value(&result.step_results).unwrap();
  assert_eq!(json[0]["stdout"], "alpha\n");
  assert_eq!(json[1]["step_id"], "b");
}
