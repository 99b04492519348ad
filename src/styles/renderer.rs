// ABOUTME: Content renderer: registry mapping style ids to pure template functions.
// ABOUTME: Produces Rendered values, the only way generated content can enter a session.

use std::collections::HashMap;

/// A pure function turning a prompt into styled text.
pub type RenderFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Output of one render, tied to the inputs that produced it.
///
/// Fields are private and there is no public constructor, so session content
/// can only ever come from [`ContentRenderer::render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    style_id: String,
    prompt: String,
    content: String,
}

impl Rendered {
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub(crate) fn into_parts(self) -> (String, String, String) {
        (self.style_id, self.prompt, self.content)
    }
}

/// Text returned for a style id with no registered template.
pub fn fallback(prompt: &str) -> String {
    format!("Generated content about {}", prompt)
}

/// Registry of style templates.
pub struct ContentRenderer {
    templates: HashMap<String, RenderFn>,
}

impl ContentRenderer {
    /// An empty registry: every id renders the fallback.
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Registry preloaded with templates for the built-in presets.
    pub fn builtin() -> Self {
        let mut renderer = Self::empty();
        renderer.register("tim-ferriss", tim_ferriss);
        renderer.register("tim-ferriss-james-clear", tim_ferriss_james_clear);
        renderer.register("shane-parrish", shane_parrish);
        renderer.register("mark-manson", mark_manson);
        renderer.register("david-perell", david_perell);
        renderer
    }

    /// Register (or replace) the template for a style id.
    pub fn register<F>(&mut self, style_id: &str, template: F)
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.templates.insert(style_id.to_string(), Box::new(template));
    }

    /// Register a template string where each `{prompt}` is replaced by the prompt.
    pub fn register_template(&mut self, style_id: &str, template: String) {
        self.register(style_id, move |prompt| template.replace("{prompt}", prompt));
    }

    pub fn has_template(&self, style_id: &str) -> bool {
        self.templates.contains_key(style_id)
    }

    /// Render a prompt in the given style. Unknown ids fall back, never fail.
    pub fn render(&self, style_id: &str, prompt: &str) -> Rendered {
        let content = match self.templates.get(style_id) {
            Some(template) => template(prompt),
            None => fallback(prompt),
        };
        Rendered {
            style_id: style_id.to_string(),
            prompt: prompt.to_string(),
            content,
        }
    }
}

impl std::fmt::Debug for ContentRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<&String> = self.templates.keys().collect();
        ids.sort();
        f.debug_struct("ContentRenderer").field("templates", &ids).finish()
    }
}

fn tim_ferriss(prompt: &str) -> String {
    format!(
        "# Tim Ferriss Style\n\n\
         I've been exploring {prompt} for the past 6 months, and here's what I've found: \
         the 80/20 principle applies perfectly. About 20% of the approaches produce 80% of the results.\n\n\
         Three things to consider:\n\
         - What if you started with the end in mind?\n\
         - Have you tested minimum effective doses?\n\
         - Could you eliminate before you optimize?"
    )
}

fn tim_ferriss_james_clear(prompt: &str) -> String {
    format!(
        "# Tim Ferriss + James Clear Style\n\n\
         I've been exploring {prompt} for months, and discovered something interesting.\n\n\
         The most successful people don't have more discipline. They have better systems.\n\n\
         Here's a simple 2-step process I've developed:\n\
         1. Reduce friction for what you want to do\n\
         2. Increase friction for what you don't want to do\n\n\
         Small habits, remarkable results."
    )
}

fn shane_parrish(prompt: &str) -> String {
    format!(
        "# Shane Parrish Style\n\n\
         When examining {prompt}, we need to apply mental models that reveal the underlying structure.\n\n\
         First principles thinking shows us that:\n\n\
         1. Complex systems have emergent properties not visible at first glance\n\
         2. Second-order effects often dominate initial outcomes\n\
         3. Incentives drive behavior, sometimes in counterintuitive ways\n\n\
         The map is not the territory. Let's explore the actual landscape."
    )
}

fn mark_manson(prompt: &str) -> String {
    format!(
        "# Mark Manson Style\n\n\
         Let's be honest about {prompt} \u{2013} most of what you've heard is complete BS.\n\n\
         Here's the uncomfortable truth: you're probably focusing on the wrong things. And that's ok! We all do it.\n\n\
         The real question isn't \"how do I succeed at this?\" but rather \"why the hell do I care about this in the first place?\"\n\n\
         Give fewer f*cks about what doesn't matter, and you'll have more to give to what does."
    )
}

fn david_perell(prompt: &str) -> String {
    format!(
        "# David Perell Style\n\n\
         I've been thinking about {prompt} through the lens of information curation.\n\n\
         Internet writing is different. It's not linear \u{2013} it's networked. Here's how to approach this topic:\n\n\
         1. Collect ideas like a researcher: observe, record, connect\n\
         2. Share insights like a journalist: clear, concise, compelling\n\
         3. Build knowledge like a historian: context, patterns, meaning\n\n\
         The best ideas emerge at the intersection of disciplines."
    )
}
