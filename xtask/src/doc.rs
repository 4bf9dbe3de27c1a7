use duct::cmd;

pub fn doc_crate(private: bool, open: bool) -> anyhow::Result<()> {
    let mut doc_args = vec!["doc", "--package", "liloconf-core", "--no-deps"];
    if private {
        doc_args.push("--document-private-items");
    }
    if open {
        doc_args.push("--open");
    }

    cmd("cargo", doc_args).run()?;
    Ok(())
}
