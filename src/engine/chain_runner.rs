// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;

use crate::capabilities::{CapabilityRegistry, ProcessorCapabilities};
use crate::config::consts::GROUP_SEPARATOR;
use crate::decorators::original_decorated_object;
use crate::errors::ProcessorResult;
use crate::model::{Resource, ResourceType};
use crate::observability::messages::pipeline::{GroupProcessingCompleted, GroupProcessingStarted};
use crate::observability::messages::processor::{
    ProcessorExecutionCompleted, ProcessorExecutionFailed, ProcessorExecutionStarted, ProcessorSkipped,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{PostProcessor, Processor};

/// A configured processor chain and the id it was configured under.
#[derive(Clone)]
pub struct NamedProcessor {
    pub id: String,
    pub processor: Arc<dyn Processor>,
}

impl NamedProcessor {
    pub fn new(id: impl Into<String>, processor: Arc<dyn Processor>) -> Self {
        Self {
            id: id.into(),
            processor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Pre,
    Post,
}

/// Capability report for one configured chain, as resolved right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainDescription {
    pub id: String,
    pub phase: Phase,
    /// Name of the outermost processor in the chain.
    pub processor: &'static str,
    /// Name of the undecorated processor at the bottom of the chain.
    pub original: &'static str,
    pub supported_types: Vec<ResourceType>,
    pub minimize: bool,
}

/// Runs resources through pre-processors, merges them per type and runs the
/// merged group through post-processors.
///
/// Which processors apply is decided from capabilities resolved at run time,
/// so decorated chains are routed exactly like the processors they wrap.
pub struct ChainRunner {
    registry: Arc<CapabilityRegistry>,
    pre_processors: Vec<NamedProcessor>,
    post_processors: Vec<NamedProcessor>,
    minimize: bool,
}

impl ChainRunner {
    pub fn new(registry: Arc<CapabilityRegistry>, minimize: bool) -> Self {
        Self {
            registry,
            pre_processors: Vec::new(),
            post_processors: Vec::new(),
            minimize,
        }
    }

    pub fn with_pre_processor(mut self, id: impl Into<String>, processor: Arc<dyn Processor>) -> Self {
        self.pre_processors.push(NamedProcessor::new(id, processor));
        self
    }

    pub fn with_post_processor(mut self, id: impl Into<String>, processor: Arc<dyn Processor>) -> Self {
        self.post_processors.push(NamedProcessor::new(id, processor));
        self
    }

    pub fn pre_processors(&self) -> &[NamedProcessor] {
        &self.pre_processors
    }

    pub fn post_processors(&self) -> &[NamedProcessor] {
        &self.post_processors
    }

    pub fn minimize(&self) -> bool {
        self.minimize
    }

    pub fn registry(&self) -> &Arc<CapabilityRegistry> {
        &self.registry
    }

    /// Run every pre-processor enabled for `resource`, in order, with the
    /// resource as context.
    pub async fn pre_process(&self, resource: &Resource, content: Vec<u8>) -> ProcessorResult<Vec<u8>> {
        let mut content = content;
        for named in &self.pre_processors {
            let capabilities = ProcessorCapabilities::resolve(&self.registry, named.processor.as_ref());
            if !capabilities.is_enabled_for_resource(resource) {
                ProcessorSkipped {
                    processor_id: &named.id,
                    resource_uri: &resource.uri,
                    reason: skip_reason(&capabilities, resource.resource_type),
                }
                .log();
                continue;
            }

            ProcessorExecutionStarted {
                processor_id: &named.id,
                resource_uri: Some(&resource.uri),
                input_size: content.len(),
            }
            .log();

            let start = Instant::now();
            let mut output = Vec::with_capacity(content.len());
            let result = named
                .processor
                .process(Some(resource), &mut content.as_slice(), &mut output)
                .await;
            content = self.finish(named, content.len(), output, result, start)?;
        }
        Ok(content)
    }

    /// Run every post-processor enabled for a merged group of
    /// `resource_type`, in order, without resource context.
    pub async fn post_process(&self, resource_type: ResourceType, content: Vec<u8>) -> ProcessorResult<Vec<u8>> {
        let group_label = format!("*.{}", resource_type.extension());
        let mut content = content;
        for named in &self.post_processors {
            let capabilities = ProcessorCapabilities::resolve(&self.registry, named.processor.as_ref());
            if !capabilities.is_enabled_for(resource_type, self.minimize) {
                ProcessorSkipped {
                    processor_id: &named.id,
                    resource_uri: &group_label,
                    reason: skip_reason(&capabilities, resource_type),
                }
                .log();
                continue;
            }

            ProcessorExecutionStarted {
                processor_id: &named.id,
                resource_uri: None,
                input_size: content.len(),
            }
            .log();

            let start = Instant::now();
            let mut output = Vec::with_capacity(content.len());
            let result = named
                .processor
                .process_without_context(&mut content.as_slice(), &mut output)
                .await;
            content = self.finish(named, content.len(), output, result, start)?;
        }
        Ok(content)
    }

    /// Pre-process each resource, join the results and post-process the
    /// merged group.
    pub async fn process_group(
        &self,
        resource_type: ResourceType,
        resources: Vec<(Resource, Vec<u8>)>,
    ) -> ProcessorResult<Vec<u8>> {
        GroupProcessingStarted {
            resource_type,
            resource_count: resources.len(),
            minimize: self.minimize,
        }
        .log();

        let start = Instant::now();
        let mut merged = Vec::new();
        for (index, (resource, content)) in resources.into_iter().enumerate() {
            let processed = self.pre_process(&resource, content).await?;
            if index > 0 {
                merged.extend_from_slice(GROUP_SEPARATOR.as_bytes());
            }
            merged.extend_from_slice(&processed);
        }

        let output = self.post_process(resource_type, merged).await?;

        GroupProcessingCompleted {
            resource_type,
            output_size: output.len(),
            duration: start.elapsed(),
        }
        .log();

        Ok(output)
    }

    /// Group resources by type and process each non-empty group, in
    /// canonical type order. Resources keep their relative order.
    pub async fn process_all(
        &self,
        resources: Vec<(Resource, Vec<u8>)>,
    ) -> ProcessorResult<Vec<(ResourceType, Vec<u8>)>> {
        let mut outputs = Vec::new();
        let mut remaining = resources;

        for resource_type in ResourceType::ALL {
            let (group, rest): (Vec<_>, Vec<_>) = remaining
                .into_iter()
                .partition(|(resource, _)| resource.resource_type == resource_type);
            remaining = rest;

            if !group.is_empty() {
                outputs.push((resource_type, self.process_group(resource_type, group).await?));
            }
        }

        Ok(outputs)
    }

    pub fn describe(&self) -> Vec<ChainDescription> {
        let pre = self.pre_processors.iter().map(|named| (Phase::Pre, named));
        let post = self.post_processors.iter().map(|named| (Phase::Post, named));

        pre.chain(post)
            .map(|(phase, named)| {
                let capabilities = ProcessorCapabilities::resolve(&self.registry, named.processor.as_ref());
                ChainDescription {
                    id: named.id.clone(),
                    phase,
                    processor: named.processor.name(),
                    original: original_decorated_object(named.processor.as_ref()).name(),
                    supported_types: capabilities.supported_resource_types(),
                    minimize: capabilities.minimize,
                }
            })
            .collect()
    }

    fn finish(
        &self,
        named: &NamedProcessor,
        input_size: usize,
        output: Vec<u8>,
        result: ProcessorResult<()>,
        start: Instant,
    ) -> ProcessorResult<Vec<u8>> {
        match result {
            Ok(()) => {
                ProcessorExecutionCompleted {
                    processor_id: &named.id,
                    input_size,
                    output_size: output.len(),
                    duration: start.elapsed(),
                }
                .log();
                Ok(output)
            }
            Err(error) => {
                ProcessorExecutionFailed {
                    processor_id: &named.id,
                    error: &error,
                }
                .log();
                Err(error)
            }
        }
    }
}

fn skip_reason(capabilities: &ProcessorCapabilities, resource_type: ResourceType) -> &'static str {
    if capabilities.supports(resource_type) {
        "minimize-only processor on a non-minimized resource"
    } else {
        "unsupported resource type"
    }
}
