use registry_scraper::config::ScrapeConfig;
use registry_scraper::core::ScrapeError;
use registry_scraper::metadata::{ProviderMetadata, ProviderScraper, ResourceScraper};

use crate::common::{ScrapeProject, widget_page};

const SUBNET_PAGE: &str = r#"---
subcategory: "Network"
layout: "azurerm"
page_title: "Azure Resource Manager: azurerm_subnet"
description: |-
  Manages a subnet. Subnets represent network segments within the IP space defined by the virtual network.
---

# azurerm_subnet

Manages a subnet.

## Example Usage

```hcl
provider "azurerm" {
  features {}
}

resource "azurerm_resource_group" "example" {
  name     = "example-resources"
  location = "West Europe"
}

resource "azurerm_virtual_network" "example" {
  name                = "example-network"
  address_space       = ["10.0.0.0/16"]
  location            = azurerm_resource_group.example.location
  resource_group_name = azurerm_resource_group.example.name
}

resource "azurerm_subnet" "example" {
  name                 = "example-subnet"
  resource_group_name  = azurerm_resource_group.example.name
  virtual_network_name = azurerm_virtual_network.example.name
  address_prefixes     = ["10.0.1.0/24"]
}
```

## Arguments Reference

The following arguments are supported:

* `name` - (Required) The name of the subnet. Changing this forces a new resource to be created.

* `resource_group_name` - (Required) The name of the resource group in which to create the subnet.

* `address_prefixes` - (Required) The address prefixes to use for the subnet.

## Attributes Reference

* `id` - The subnet ID.

## Import

Subnets can be imported using the `resource id`, e.g.

```shell
terraform import azurerm_subnet.exampleSubnet /subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/mygroup1/providers/Microsoft.Network/virtualNetworks/myvnet1/subnets/mysubnet1
```
"#;

fn scraper() -> ResourceScraper {
    ResourceScraper::new(&ScrapeConfig::new("hashicorp/terraform-provider-azurerm", "docs")).unwrap()
}

#[test]
fn test_realistic_provider_page() {
    let resource = scraper().scrape_markdown(SUBNET_PAGE).unwrap();

    assert_eq!(resource.name, "azurerm_subnet");
    assert_eq!(resource.title_name, "azurerm_subnet");
    assert_eq!(resource.sub_category, "Network");
    assert_eq!(
        resource.description,
        "Manages a subnet. Subnets represent network segments within the IP space defined by the virtual network."
    );

    assert_eq!(
        resource.argument_docs["name"],
        "- (Required) The name of the subnet. Changing this forces a new resource to be created."
    );
    assert_eq!(resource.argument_docs["id"], "- The subnet ID.");
    assert_eq!(resource.argument_docs.len(), 4);

    assert_eq!(resource.import_statements.len(), 1);
    assert!(resource.import_statements[0].starts_with("terraform import azurerm_subnet.exampleSubnet"));

    assert_eq!(resource.examples.len(), 1);
    let example = &resource.examples[0];
    assert_eq!(example.name, "example");
    assert_eq!(example.references["resource_group_name"], "azurerm_resource_group.example.name");
    assert_eq!(example.references["virtual_network_name"], "azurerm_virtual_network.example.name");
    assert!(!example.references.contains_key("name"));

    let dependencies: Vec<&String> = example.dependencies.keys().collect();
    assert_eq!(dependencies, vec!["azurerm_resource_group.example", "azurerm_virtual_network.example"]);

    let manifest: serde_json::Value = serde_json::from_str(&example.manifest).unwrap();
    assert_eq!(manifest["name"], "example-subnet");
    assert_eq!(manifest["address_prefixes"][0], "10.0.1.0/24");
}

#[test]
fn test_multiple_snippets_accumulate_examples() {
    let page = widget_page("widget_instance")
        .example("resource \"widget_instance\" \"second\" {\n  size = 2\n}")
        .render();

    let resource = scraper().scrape_markdown(&page).unwrap();
    let names: Vec<&str> = resource.examples.iter().map(|e| e.name.as_str()).collect();

    assert_eq!(names, vec!["example", "second"]);
    assert!(resource.examples[1].dependencies.is_empty());
}

#[tokio::test]
async fn test_provider_tree_round_trip() {
    let project = ScrapeProject::new();
    project.add_page("r/widget_instance.html.markdown", &widget_page("widget_instance"));
    project.add_page("r/widget_disk.html.markdown", &widget_page("widget_disk"));
    project.add_page("d/widget_image.html.markdown", &widget_page("widget_image"));
    project.add_file("index.md", "# not scraped");

    let scraper = ProviderScraper::new(ScrapeConfig {
        max_parallel: 2,
        ..ScrapeConfig::new("example/terraform-provider-widget", project.docs_dir())
    })
    .unwrap();
    let metadata = scraper.scrape().await.unwrap();

    let names: Vec<&String> = metadata.resources.keys().collect();
    assert_eq!(names, vec!["widget_disk", "widget_image", "widget_instance"]);

    metadata.store(&project.output()).unwrap();
    assert_eq!(ProviderMetadata::load(&project.output()).unwrap(), metadata);
}

#[tokio::test]
async fn test_failing_document_aborts_with_path() {
    let project = ScrapeProject::new();
    project.add_page("a.markdown", &widget_page("widget_instance"));
    project.add_file("b.markdown", "# no prelude\n\nJust text.\n");

    let scraper = ProviderScraper::new(ScrapeConfig::new("example/widget", project.docs_dir())).unwrap();
    let err = scraper.scrape().await.unwrap_err();

    assert!(err.to_string().contains("b.markdown"));
    assert!(matches!(err.root(), ScrapeError::MalformedPrelude { .. }));
}
