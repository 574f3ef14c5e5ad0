//! Documentation screen content: concept cards and guide sections.

/// A short concept summary shown as a card at the top of the Docs screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConceptCard {
    pub title: &'static str,
    pub body: &'static str,
}

/// A code sample rendered in its own titled window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSample {
    pub filename: &'static str,
    pub code: &'static str,
}

/// A numbered guide section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocSection {
    pub title: &'static str,
    pub body: &'static str,
    pub code: Option<CodeSample>,
}

pub const DOCS_TITLE: &str = "Documentation";

pub const DOCS_SUBTITLE: &str =
    "Comprehensive guide to building production-ready LLM applications with ChainForge.";

pub const CONCEPTS: [ConceptCard; 4] = [
    ConceptCard {
        title: "Runnable Protocol",
        body: "The core abstraction. Anything that implements invoke and stream is a Runnable. \
               Chain them together using the pipe | operator.",
    },
    ConceptCard {
        title: "Agents",
        body: "Built-in ReAct agents that use a reasoning loop (Thought -> Action -> Observation) \
               to solve complex tasks using tools.",
    },
    ConceptCard {
        title: "Tools",
        body: "Define tools easily using the @tool decorator. Pydantic integration ensures \
               robust argument validation.",
    },
    ConceptCard {
        title: "RAG",
        body: "VectorStore abstractions and Retriever interfaces to easily build Retrieval \
               Augmented Generation pipelines.",
    },
];

pub const SECTIONS: [DocSection; 4] = [
    DocSection {
        title: "1. Installation",
        body: "ChainForge is designed to be lightweight. You can install it via pip or simply \
               drop the chainforge.py file into your project.",
        code: Some(CodeSample {
            filename: "shell",
            code: "pip install chainforge",
        }),
    },
    DocSection {
        title: "2. Building Chains",
        body: "Compose prompts, models, and custom logic using the pipe | operator. This creates \
               a RunnableSequence.",
        code: Some(CodeSample {
            filename: "basic_chain.py",
            code: include_str!("../../assets/docs/basic_chain.py"),
        }),
    },
    DocSection {
        title: "3. Agents & Tools",
        body: "Agents use the \"ReAct\" pattern to reason about which tools to use. Use the @tool \
               decorator to turn Python functions into tools.",
        code: Some(CodeSample {
            filename: "agent_with_tools.py",
            code: include_str!("../../assets/docs/agent_with_tools.py"),
        }),
    },
    DocSection {
        title: "4. RAG Pipelines",
        body: "Implement Retrieval Augmented Generation by combining a VectorStore with an LLM.",
        code: Some(CodeSample {
            filename: "rag_pipeline.py",
            code: include_str!("../../assets/docs/rag_pipeline.py"),
        }),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_numbered_in_order() {
        for (i, section) in SECTIONS.iter().enumerate() {
            assert!(section.title.starts_with(&format!("{}.", i + 1)));
        }
    }

    #[test]
    fn test_code_samples_are_loaded() {
        let samples: Vec<&CodeSample> = SECTIONS.iter().filter_map(|s| s.code.as_ref()).collect();
        assert_eq!(samples.len(), 4);
        assert!(samples[1].code.contains("chain = prompt | llm"));
        assert!(samples[2].code.contains("@tool(\"calculator\""));
        assert!(samples[3].code.contains("InMemoryVectorStore"));
    }
}
