//! Prompt templates, one builder per catalog entry.
//!
//! Builders take the raw user input and return the system/user prompt pair
//! sent to the remote service. The flagship builder instructs the model to
//! emit only the structured report; all others request grounded free text.

use crate::descriptor::PromptParts;

pub(crate) fn keyword_insight(input: &str) -> PromptParts {
    PromptParts {
        system_prompt: "You are a senior SEO strategist. Ground your analysis in live search \
                        results. Respond with a single JSON object matching the provided schema: \
                        the target topic, 3 to 5 related keywords ordered by relevance, and a \
                        content outline of at least five sections, each with a coverage goal. \
                        Output the JSON object only, with no surrounding prose."
            .to_string(),
        user_query: format!("Produce a structured SEO insight report for the topic: {input}"),
    }
}

pub(crate) fn keyword_difficulty(input: &str) -> PromptParts {
    PromptParts {
        system_prompt: "You are an SEO analyst. Using current search results, estimate how hard \
                        it is to rank for the given keyword: who holds the top positions, what \
                        content formats dominate, and what a realistic path to page one looks like."
            .to_string(),
        user_query: format!("Assess the ranking difficulty for the keyword: {input}"),
    }
}

pub(crate) fn competitor_scan(input: &str) -> PromptParts {
    PromptParts {
        system_prompt: "You are a competitive research assistant. Identify the pages currently \
                        ranking for the topic, summarize the angle each one takes, and point out \
                        gaps none of them cover."
            .to_string(),
        user_query: format!("Scan the competition for: {input}"),
    }
}

pub(crate) fn content_brief(input: &str) -> PromptParts {
    PromptParts {
        system_prompt: "You are a content editor preparing a writer's brief. Cover target \
                        audience, search intent, recommended word count, headings to include, \
                        and questions the piece must answer."
            .to_string(),
        user_query: format!("Write a content brief for an article about: {input}"),
    }
}

pub(crate) fn title_generator(input: &str) -> PromptParts {
    PromptParts {
        system_prompt: "You write title tags. Propose ten options under 60 characters, mixing \
                        how-to, listicle, and question formats. Put the primary keyword near the \
                        front of each."
            .to_string(),
        user_query: format!("Generate title tag options for a page about: {input}"),
    }
}

pub(crate) fn meta_description(input: &str) -> PromptParts {
    PromptParts {
        system_prompt: "You write meta descriptions. Propose five options between 140 and 160 \
                        characters, each with a clear value proposition and a call to action."
            .to_string(),
        user_query: format!("Write meta description options for a page about: {input}"),
    }
}

pub(crate) fn on_page_audit(input: &str) -> PromptParts {
    PromptParts {
        system_prompt: "You are an on-page SEO auditor. Given a page topic or URL, list the \
                        on-page factors to check (headings, keyword placement, internal links, \
                        media, freshness) and the most likely quick wins."
            .to_string(),
        user_query: format!("Outline an on-page audit for: {input}"),
    }
}

pub(crate) fn internal_linking(input: &str) -> PromptParts {
    PromptParts {
        system_prompt: "You plan internal linking. Suggest hub and spoke pages for the topic, \
                        anchor text candidates, and which existing page types should link to the \
                        new content."
            .to_string(),
        user_query: format!("Plan internal linking around: {input}"),
    }
}

pub(crate) fn schema_markup(input: &str) -> PromptParts {
    PromptParts {
        system_prompt: "You are a structured-data specialist. Recommend the schema.org types \
                        that fit the page, the required and recommended properties for each, and \
                        show an example JSON-LD snippet."
            .to_string(),
        user_query: format!("Recommend schema markup for a page about: {input}"),
    }
}

pub(crate) fn robots_advisor(input: &str) -> PromptParts {
    PromptParts {
        system_prompt: "You advise on robots.txt and crawl directives. Explain what should be \
                        allowed, disallowed, or handled via meta robots for the described site \
                        area, and call out common misconfigurations."
            .to_string(),
        user_query: format!("Advise on crawl directives for: {input}"),
    }
}
