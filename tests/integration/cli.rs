use predicates::prelude::*;
use registry_scraper::metadata::ProviderMetadata;
use registry_scraper::test_utils::MarkdownPage;

use crate::common::{ScrapeProject, widget_page};

#[test]
fn test_scrape_writes_metadata_and_summary() {
    let project = ScrapeProject::new();
    project.add_page("r/widget_instance.html.markdown", &widget_page("widget_instance"));
    project.add_page("r/widget_disk.html.markdown", &widget_page("widget_disk"));

    project
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Scraped 2 resources for example/terraform-provider-widget"));

    let metadata = ProviderMetadata::load(&project.output()).unwrap();
    assert_eq!(metadata.name, "example/terraform-provider-widget");
    assert_eq!(metadata.resources.len(), 2);

    let disk = &metadata.resources["widget_disk"];
    assert_eq!(disk.examples.len(), 1);
    assert_eq!(disk.examples[0].references["network_id"], "widget_network.net.id");
    assert_eq!(disk.import_statements, vec!["terraform import widget_disk.example 12345"]);
}

#[test]
fn test_quiet_suppresses_summary() {
    let project = ScrapeProject::new();
    project.add_page("widget_instance.markdown", &widget_page("widget_instance"));

    project.command().arg("--quiet").assert().success().stdout(predicate::str::is_empty());
    assert!(project.output().exists());
}

#[test]
fn test_malformed_prelude_fails() {
    let project = ScrapeProject::new();
    project.add_page("widget_instance.markdown", &widget_page("widget_instance"));
    project.add_file("broken.markdown", "---\nlayout: \"widget\"\n---\n\n# broken\n");

    project
        .command()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("broken.markdown"))
        .stderr(predicate::str::contains("Failed to parse prelude"));

    assert!(!project.output().exists());
}

#[test]
fn test_invalid_example_can_be_skipped() {
    let project = ScrapeProject::new();
    let page = MarkdownPage::new("widget_instance", "Compute")
        .example("resource \"widget_instance\" \"broken\" {\n  size = \n")
        .example("resource \"widget_instance\" \"valid\" {\n  size = 1\n}");
    project.add_page("widget_instance.markdown", &page);

    project.command().assert().failure().stderr(predicate::str::contains("Failed to parse example"));

    project.command().arg("--skip-example-errors").assert().success();
    let metadata = ProviderMetadata::load(&project.output()).unwrap();
    assert_eq!(metadata.resources["widget_instance"].examples[0].name, "valid");
}

#[test]
fn test_missing_provider_name_is_a_configuration_error() {
    let project = ScrapeProject::new();

    let mut cmd = assert_cmd::Command::cargo_bin("registry-scraper").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("REGISTRY_SCRAPER_PROVIDER_NAME")
        .arg("--repo-path")
        .arg(project.docs_dir())
        .assert()
        .failure()
        .stderr(predicate::str::contains("provider name is required"));
}

#[test]
fn test_config_file_and_environment() {
    let project = ScrapeProject::new();
    project.add_page("widget_instance.md", &widget_page("widget_instance"));
    project.repo.add_file("scraper.toml", "extension = \"md\"\nskip_example_references = true\n");

    project
        .command()
        .arg("--config")
        .arg(project.repo.path().join("scraper.toml"))
        .env("REGISTRY_SCRAPER_MAX_PARALLEL", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scraped 1 resources"));

    let metadata = ProviderMetadata::load(&project.output()).unwrap();
    assert!(metadata.resources["widget_instance"].examples[0].references.is_empty());
}
