// ABOUTME: Sample data for demo deployments
// ABOUTME: Seeds one e-commerce project with hand-written roadmap, MVP and architecture documents

use blueprint_core::{
    DocumentCreateInput, DocumentType, Project, ProjectCreateInput, ProjectNeeds,
};
use tracing::info;

use crate::{BlueprintStorage, StorageResult};

const SAMPLE_ROADMAP: &str = r#"
<h1>Product Roadmap: E-Commerce Platform</h1>
<h2>Phase 1: Foundation (Q1)</h2>
<ul>
  <li>User authentication and profiles</li>
  <li>Product catalog and search</li>
  <li>Basic shopping cart functionality</li>
  <li>Checkout process with payment integration</li>
</ul>
<h2>Phase 2: Growth (Q2)</h2>
<ul>
  <li>Seller dashboard and inventory management</li>
  <li>Reviews and ratings system</li>
  <li>Order tracking and history</li>
  <li>Basic analytics for sellers</li>
</ul>
<h2>Phase 3: Expansion (Q3-Q4)</h2>
<ul>
  <li>Mobile app development</li>
  <li>Social sharing features</li>
  <li>Loyalty program implementation</li>
  <li>Advanced recommendation engine</li>
</ul>
"#;

const SAMPLE_MVP: &str = r#"
<h1>MVP Blueprint: E-Commerce Platform</h1>
<h2>Core Features</h2>
<ul>
  <li>User registration and login</li>
  <li>Product browsing and search</li>
  <li>Shopping cart</li>
  <li>Secure checkout with credit card processing</li>
  <li>Order confirmation</li>
</ul>
<h2>User Personas</h2>
<ul>
  <li>Buyer: Looking for unique handcrafted products</li>
  <li>Seller: Artisan wanting to sell their handmade goods</li>
</ul>
<h2>Success Metrics</h2>
<ul>
  <li>User registration rate</li>
  <li>Conversion rate</li>
  <li>Average order value</li>
</ul>
"#;

const SAMPLE_ARCHITECTURE: &str = r#"
<h1>Architecture Design: E-Commerce Platform</h1>
<h2>Frontend</h2>
<ul>
  <li>React.js for web client</li>
  <li>React Native for mobile apps</li>
  <li>Redux for state management</li>
  <li>Material UI component library</li>
</ul>
<h2>Backend</h2>
<ul>
  <li>Node.js with Express</li>
  <li>PostgreSQL database</li>
  <li>Redis for caching</li>
  <li>REST API with JSON Web Tokens</li>
</ul>
<h2>Infrastructure</h2>
<ul>
  <li>AWS hosting (EC2, RDS, S3)</li>
  <li>Docker containers</li>
  <li>CI/CD with GitHub Actions</li>
  <li>Monitoring with CloudWatch</li>
</ul>
"#;

/// Insert the demo project and its three documents. Returns the created project.
pub async fn seed_sample_data(storage: &dyn BlueprintStorage) -> StorageResult<Project> {
    let mut input = ProjectCreateInput::new("E-Commerce Platform", "web-application")
        .with_description("Mobile marketplace for handcrafted goods")
        .with_industry("retail")
        .with_needs(ProjectNeeds {
            roadmap: true,
            mvp: true,
            architecture: true,
            project_plan: false,
        });
    input.status = Some("Active".to_string());

    let project = storage.create_project(input).await?;

    for (document_type, title, content) in [
        (DocumentType::Roadmap, "Roadmap", SAMPLE_ROADMAP),
        (DocumentType::Mvp, "MVP Blueprint", SAMPLE_MVP),
        (DocumentType::Architecture, "Architecture Design", SAMPLE_ARCHITECTURE),
    ] {
        storage
            .create_document(DocumentCreateInput {
                project_id: project.id,
                name: format!("{} {}", project.name, title),
                document_type,
                content: content.to_string(),
            })
            .await?;
    }

    info!("Seeded sample project '{}' (id {})", project.name, project.id);
    Ok(project)
}
