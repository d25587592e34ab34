//! Render a single blog post from the command line

use anyhow::Result;
use std::io::{self, Write};

use crate::content::{find_post, Block};
use crate::generator::{Generator, Route};
use crate::App;

/// Print a post's blocks, or its full page when `html` is set
pub async fn run(app: &App, slug: &str, html: bool) -> Result<()> {
    if html {
        let generator = Generator::new(app)?;
        let page = generator.render(&Route::BlogPost(slug.to_string())).await?;
        writeln!(io::stdout(), "{}", page)?;
    } else {
        let post = find_post(slug)?;
        write_blocks(&post.blocks(), &mut io::stdout().lock())?;
    }

    Ok(())
}

/// One line per block: kind, then text
pub fn write_blocks<W: Write>(blocks: &[Block], out: &mut W) -> Result<()> {
    for block in blocks {
        match block {
            Block::Heading2(text) => writeln!(out, "h2     {}", text)?,
            Block::Heading3(text) => writeln!(out, "h3     {}", text)?,
            Block::ListItem(text) => writeln!(out, "li     {}", text)?,
            Block::Blank => writeln!(out, "blank")?,
            Block::Paragraph(text) => writeln!(out, "p      {}", text)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::render_blocks;

    #[test]
    fn test_write_blocks() {
        let mut out = Vec::new();
        write_blocks(&render_blocks("## A\n### B\n- c\n\nd\n```"), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "h2     A\nh3     B\nli     c\nblank\np      d\n"
        );
    }

    #[tokio::test]
    async fn test_render_unknown_slug() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(dir.path()).unwrap();
        let err = run(&app, "missing", false).await.unwrap_err();
        assert_eq!(err.to_string(), "post not found: missing");
    }
}
