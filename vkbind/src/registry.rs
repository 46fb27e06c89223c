// SPDX-FileCopyrightText: 2025 2025 Contributors to the Media eXchange Layer project.
// SPDX-License-Identifier: Apache-2.0

//! API registry loading.
//!
//! Only the `<command>` elements of the registry are consumed. For each one the
//! return type, the command name and the ordered parameters are kept; every
//! other part of the registry grammar is ignored.
//!
//! ```xml
//! <command>
//!     <proto><type>VkResult</type> <name>vkCreateInstance</name></proto>
//!     <param>const <type>VkInstanceCreateInfo</type>* <name>pCreateInfo</name></param>
//! </command>
//! ```

use std::{collections::HashMap, path::Path};

use roxmltree::{Document, Node};

use crate::{Error, Result};

/// Name of one foreign API entry point.
pub type Symbol = String;

/// Return type that produces a no-value forwarding call.
pub const VOID: &str = "void";

/// One parameter of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Full declaration as written in the registry (`const VkFoo* pFoo`).
    pub declaration: String,
    /// Bare parameter name used when forwarding a call.
    pub name: String,
}

/// Return type and parameters of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    pub return_type: String,
    pub params: Vec<Parameter>,
}

impl FunctionSignature {
    pub fn returns_void(&self) -> bool {
        self.return_type == VOID
    }
}

/// Read-only mapping from command name to signature.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    commands: HashMap<Symbol, FunctionSignature>,
}

impl Registry {
    /// Loads and parses the registry document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise see [`Registry::parse`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(Error::io(path))?;
        let registry = Self::parse(&text)?;
        tracing::debug!(
            "Loaded {} command signatures from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Parses registry XML text.
    ///
    /// Commands without a `<proto>` (aliases) are skipped. When several commands
    /// share a name the last one in document order wins.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegistryParse`] for invalid XML and
    /// [`Error::MalformedRegistry`] when a prototype or parameter lacks a name or type.
    pub fn parse(text: &str) -> Result<Self> {
        let document = Document::parse(text)?;
        let mut commands = HashMap::new();
        for command in document
            .descendants()
            .filter(|node| node.has_tag_name("command"))
        {
            let Some(proto) = child(command, "proto") else {
                continue;
            };
            let return_type = child_text(proto, "type")
                .ok_or_else(|| malformed(proto, "prototype without <type>"))?;
            let name = child_text(proto, "name")
                .ok_or_else(|| malformed(proto, "prototype without <name>"))?;

            let params = command
                .children()
                .filter(|node| node.has_tag_name("param"))
                .map(|param| {
                    let name = child_text(param, "name")
                        .ok_or_else(|| malformed(param, "parameter without <name>"))?;
                    Ok(Parameter {
                        declaration: inner_text(param),
                        name: name.to_string(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            commands.insert(
                name.to_string(),
                FunctionSignature {
                    return_type: return_type.to_string(),
                    params,
                },
            );
        }
        Ok(Registry { commands })
    }

    pub fn get(&self, symbol: &str) -> Option<&FunctionSignature> {
        self.commands.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|child| child.has_tag_name(tag))
}

fn child_text<'a>(node: Node<'a, '_>, tag: &str) -> Option<&'a str> {
    child(node, tag).and_then(|child| child.text())
}

/// Concatenation of every text node below `node`, markup stripped.
fn inner_text(node: Node) -> String {
    node.descendants()
        .filter(|descendant| descendant.is_text())
        .filter_map(|text| text.text())
        .collect()
}

fn malformed(node: Node, what: &str) -> Error {
    let position = node.document().text_pos_at(node.range().start);
    Error::MalformedRegistry(format!("{what} at {position}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGISTRY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<registry>
    <types><type name="VkResult"/></types>
    <commands comment="Vulkan command definitions">
        <command successcodes="VK_SUCCESS">
            <proto><type>VkResult</type> <name>vkCreateInstance</name></proto>
            <param>const <type>VkInstanceCreateInfo</type>* <name>pCreateInfo</name></param>
            <param optional="true">const <type>VkAllocationCallbacks</type>* <name>pAllocator</name></param>
            <param><type>VkInstance</type>* <name>pInstance</name></param>
        </command>
        <command>
            <proto><type>void</type> <name>vkCmdSetBlendConstants</name></proto>
            <param><type>VkCommandBuffer</type> <name>commandBuffer</name></param>
            <param>const <type>float</type> <name>blendConstants</name>[4]</param>
        </command>
        <command name="vkGetPhysicalDeviceFeatures2KHR" alias="vkGetPhysicalDeviceFeatures2"/>
        <command>
            <proto><type>void</type> <name>vkDestroyInstance</name></proto>
            <param optional="true"><type>VkInstance</type> <name>instance</name></param>
            <implicitexternsyncparams>
                <param>all sname:VkPhysicalDevice objects enumerated from pname:instance</param>
            </implicitexternsyncparams>
        </command>
    </commands>
</registry>
"#;

    #[test]
    fn reads_return_type_and_parameters() {
        let registry = Registry::parse(REGISTRY).unwrap();
        let create = registry.get("vkCreateInstance").unwrap();
        assert_eq!(create.return_type, "VkResult");
        assert!(!create.returns_void());
        let names: Vec<_> = create.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["pCreateInfo", "pAllocator", "pInstance"]);
        assert_eq!(
            create.params[0].declaration,
            "const VkInstanceCreateInfo* pCreateInfo"
        );
    }

    #[test]
    fn array_suffix_survives_in_declaration() {
        let registry = Registry::parse(REGISTRY).unwrap();
        let blend = registry.get("vkCmdSetBlendConstants").unwrap();
        assert!(blend.returns_void());
        assert_eq!(blend.params[1].declaration, "const float blendConstants[4]");
        assert_eq!(blend.params[1].name, "blendConstants");
    }

    #[test]
    fn aliases_are_skipped() {
        let registry = Registry::parse(REGISTRY).unwrap();
        assert!(registry.get("vkGetPhysicalDeviceFeatures2KHR").is_none());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn nested_params_are_not_command_params() {
        let registry = Registry::parse(REGISTRY).unwrap();
        let destroy = registry.get("vkDestroyInstance").unwrap();
        assert_eq!(destroy.params.len(), 1);
        assert_eq!(destroy.params[0].declaration, "VkInstance instance");
    }

    #[test]
    fn last_definition_wins() {
        let registry = Registry::parse(
            r#"<registry><commands>
                <command><proto><type>VkResult</type> <name>vkFoo</name></proto></command>
                <command api="vulkansc"><proto><type>void</type> <name>vkFoo</name></proto>
                    <param><type>uint32_t</type> <name>count</name></param></command>
            </commands></registry>"#,
        )
        .unwrap();
        let foo = registry.get("vkFoo").unwrap();
        assert_eq!(foo.return_type, "void");
        assert_eq!(foo.params.len(), 1);
    }

    #[test]
    fn parameter_without_name_is_malformed() {
        let err = Registry::parse(
            r#"<registry><command><proto><type>void</type> <name>vkFoo</name></proto>
                <param><type>uint32_t</type></param></command></registry>"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::MalformedRegistry(_)));
    }

    #[test]
    fn invalid_xml_is_a_parse_error() {
        let err = Registry::parse("<registry><command>").unwrap_err();
        assert!(matches!(err, Error::RegistryParse(_)));
    }
}
