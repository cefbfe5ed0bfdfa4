//! Prompt template builders.
//!
//! Pure functions from selection parameters to fully formed instruction
//! strings. Identical inputs yield byte-identical output; nothing here
//! performs I/O or holds state. Downstream code sends the returned string
//! as-is — no further substitution happens after this module.

use crate::framework::Framework;

/// Structured comparison of all four frameworks, with emphasis on the
/// supplied industry.
pub fn framework_comparison(industry: &str) -> String {
    format!(
        "\
Compare Toyota Production System (TPS), Ford Production System (FPS), \
Stellantis Production Way (SPW), and Lean Six Sigma (LSS) highlighting:
- Core principles and differences
- Best-fit industries (especially {industry})
- AI integration opportunities
- Real-world Canadian examples where relevant
Structure: Concise comparison table then 2-sentence summary per framework."
    )
}

/// Interactive guide for one framework in one industry, with the
/// follow-up menu embedded as literal text.
pub fn framework_guide(framework: Framework, industry: &str) -> String {
    format!(
        "\
Create interactive guide for {framework} in the {industry} industry covering:
1. Core principles (max 3 key concepts)
2. Industry-specific implementation roadmap
3. AI integration opportunities (reference Toyota/HBR examples)
4. Canadian case study example
5. Interactive options: 'Dive deeper into [concept]', 'See simulation', 'Compare frameworks'
Format: Conversational tone with clear section breaks",
        framework = framework.label(),
    )
}

/// Four-phase, six-month implementation roadmap with fixed phase names
/// and sub-bullet topics.
pub fn implementation_roadmap(framework: Framework, industry: &str) -> String {
    format!(
        "\
Create a 6-month implementation roadmap for {framework} in the {industry} industry with Canadian context:
1. **Phase 1: Assessment (Month 1)**
   - Current state value stream mapping
   - Waste identification (7+1 wastes)
   - Canadian regulatory compliance checklist
2. **Phase 2: Pilot Design (Month 2)**
   - Select 3 high-impact processes for Kaizen events
   - AI integration opportunities assessment
   - Cross-functional team formation
3. **Phase 3: Execution (Months 3-4)**
   - Standardized work documentation
   - Visual management system setup
   - AI-powered real-time monitoring
4. **Phase 4: Scale & Sustain (Months 5-6)**
   - Full deployment across production lines
   - Digital Andon system implementation
   - Continuous improvement cadence
Include Canadian-specific:
- Supply chain considerations
- Labor regulations
- Climate impact mitigation",
        framework = framework.label(),
    )
}

/// Exactly five SMART metrics with baseline, target, and frequency fields.
pub fn kpi_metrics(framework: Framework, industry: &str) -> String {
    format!(
        "Create 5 SMART KPIs for {framework} implementation in Canadian {industry} \
         sector with AI integration targets. Include baseline, target, and measurement frequency.",
        framework = framework.label(),
    )
}

/// Fixed taxonomy of four tool categories (2+2+1+1 tools) with per-tool
/// vendor, integration, ROI, and trial fields.
pub fn ai_tools_recommendation(framework: Framework, industry: &str) -> String {
    format!(
        "\
Recommend AI tools for {framework} implementation in {industry} with Canadian availability:
1. **Predictive Maintenance** (2 tools with pricing)
2. **Quality Control** (2 computer vision solutions)
3. **Supply Chain Optimization** (1 Canadian-specific platform)
4. **Real-time Analytics** (1 edge computing solution)
For each:
- Vendor name & Canadian availability
- Integration requirements
- ROI case study summary
- Free trial information",
        framework = framework.label(),
    )
}

/// Integration guidance across the three fixed communication-protocol
/// topics. Takes no parameters.
pub fn crisis_communication_integration() -> String {
    "\
Integrate crisis communication features from knowledge graph:
1. Two-way communication alerts
2. Emergency Operations protocols
3. Business crisis communication templates
Show how these interface with Lean AI systems for manufacturing environments."
        .to_string()
}

/// Free-text question asked in the context of one framework and industry.
/// Used by the web-callable entry point, which forwards the question the
/// user typed alongside their framework/industry selection.
pub fn open_question(framework: Framework, industry: &str, question: &str) -> String {
    format!(
        "\
As a Lean manufacturing consultant specializing in {framework} for the {industry} industry, \
answer the following question with practical, actionable guidance:
{question}
Ground the answer in {framework} principles and note any AI integration opportunities that apply.",
        framework = framework.label(),
    )
}
