//! Blog posts keyed by slug

use indexmap::IndexMap;
use lazy_static::lazy_static;
use serde::Serialize;
use thiserror::Error;

use super::blocks::{render_blocks, Block};

/// A blog post
#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    /// URL-safe key
    pub slug: String,

    /// Post title
    pub title: String,

    /// Raw content with line markers (`## `, `### `, `- `, fences)
    pub content: String,

    /// Publication date, `YYYY-MM-DD`
    pub date: String,

    pub category: String,
}

impl BlogPost {
    fn new(slug: &str, title: &str, date: &str, category: &str, content: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            date: date.to_string(),
            category: category.to_string(),
        }
    }

    /// Classify the post body into blocks
    pub fn blocks(&self) -> Vec<Block> {
        render_blocks(&self.content)
    }

    /// URL path of the post page
    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

/// Errors from post lookup
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("post not found: {0}")]
    NotFound(String),
}

lazy_static! {
    static ref POSTS: IndexMap<String, BlogPost> = [
        BlogPost::new(
            "getting-started",
            "Getting Started with Evolve-UI",
            "2024-01-15",
            "Tutorial",
            GETTING_STARTED,
        ),
        BlogPost::new(
            "nextjs-routing",
            "Understanding Next.js App Router",
            "2024-01-20",
            "Guide",
            NEXTJS_ROUTING,
        ),
        BlogPost::new(
            "shadcn-ui",
            "Building UIs with shadcn/ui",
            "2024-01-25",
            "Tutorial",
            SHADCN_UI,
        ),
    ]
    .into_iter()
    .map(|post| (post.slug.clone(), post))
    .collect();
}

/// Find a post by slug
pub fn find_post(slug: &str) -> Result<&'static BlogPost, ContentError> {
    POSTS
        .get(slug)
        .ok_or_else(|| ContentError::NotFound(slug.to_string()))
}

/// All posts in definition order
pub fn posts() -> impl Iterator<Item = &'static BlogPost> {
    POSTS.values()
}

/// All slugs, one per post page to generate
pub fn slugs() -> Vec<&'static str> {
    POSTS.keys().map(String::as_str).collect()
}

/// Number of posts per category, in first-seen order
pub fn categories() -> IndexMap<&'static str, usize> {
    let mut counts = IndexMap::new();
    for post in POSTS.values() {
        *counts.entry(post.category.as_str()).or_insert(0) += 1;
    }
    counts
}

const GETTING_STARTED: &str = r#"
Welcome to Evolve-UI! This guide will help you get started with the template.

## What You'll Learn

In this tutorial, you'll learn how to:
- Set up your development environment
- Understand the project structure
- Create your first component
- Add new routes

## Prerequisites

Before you begin, make sure you have:
- Node.js 18 or later installed
- pnpm package manager
- A code editor (VS Code recommended)

## Installation

First, install the dependencies:

```bash
pnpm install
```

Then start the development server:

```bash
pnpm dev
```

Your app will be running at http://localhost:3000

## Project Structure

The template follows Next.js 16 App Router conventions:

- `src/app/` - All your routes and pages
- `src/components/` - Reusable React components
- `src/components/ui/` - shadcn/ui components
- `src/lib/` - Utility functions

## Next Steps

Now that you're set up, try exploring the other routes like /dashboard to see more complex layouts in action!
    "#;

const NEXTJS_ROUTING: &str = r#"
The Next.js App Router is a powerful routing system that uses the file system to define routes.

## How Routing Works

Every folder in the `app` directory becomes a route segment. For example:
- `app/page.tsx` → `/`
- `app/about/page.tsx` → `/about`
- `app/blog/page.tsx` → `/blog`

## Dynamic Routes

You can create dynamic routes using square brackets:
- `app/blog/[slug]/page.tsx` → `/blog/any-post-name`

This page you're reading is an example of a dynamic route!

## Nested Layouts

Layouts allow you to share UI between multiple pages. Notice how the blog sidebar stays consistent across all blog pages? That's because of the `blog/layout.tsx` file.

Layouts are:
- Shared across all child pages
- Don't re-render when navigating
- Can be nested for complex UIs

## Server Components by Default

All components in the App Router are Server Components by default. This means they:
- Run on the server
- Can fetch data directly
- Don't increase JavaScript bundle size
- Have better performance

Use `"use client"` directive when you need client-side features like hooks or browser APIs.
    "#;

const SHADCN_UI: &str = r#"
shadcn/ui is a collection of beautifully designed, accessible components that you can copy and paste into your apps.

## Why shadcn/ui?

Unlike traditional component libraries, shadcn/ui:
- Copies components directly into your project
- Gives you full control over the code
- Works with Tailwind CSS
- Is fully accessible (built on Radix UI)
- Supports dark mode out of the box

## Components Used in This Template

We've included several shadcn/ui components:

### Button
```tsx
import { Button } from "@/components/ui/button";

<Button>Click me</Button>
<Button variant="outline">Outline</Button>
<Button variant="ghost">Ghost</Button>
```

### Card
```tsx
import { Card, CardHeader, CardTitle, CardContent } from "@/components/ui/card";

<Card>
  <CardHeader>
    <CardTitle>Card Title</CardTitle>
  </CardHeader>
  <CardContent>
    <p>Card content goes here</p>
  </CardContent>
</Card>
```

### Badge
```tsx
import { Badge } from "@/components/ui/badge";

<Badge>Default</Badge>
<Badge variant="secondary">Secondary</Badge>
<Badge variant="outline">Outline</Badge>
```

## Customization

All components use CSS variables for theming. You can customize colors in `globals.css`:

```css
:root {
  --primary: 221.2 83.2% 53.3%;
  --secondary: 210 40% 96.1%;
  /* ... more variables */
}
```

## Adding More Components

To add more shadcn/ui components, use the CLI:

```bash
npx shadcn@latest add [component-name]
```

This will automatically add the component to `src/components/ui/`.
    "#;
