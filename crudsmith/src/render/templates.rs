//! Embedded artifact templates
//!
//! Handlebars sources for the six artifacts. Per-field blocks iterate
//! `fields`, which the render context always supplies in emission order.

/// Property list shared by the persistent and display models
pub const PROPERTIES_PARTIAL: &str = r"{{#each fields}}
        public {{target_type}} {{name}} { get; set; }
{{/each}}
";

/// Persistent model
pub const MODEL_TEMPLATE: &str = r"namespace {{namespace}}.Models
{
    public class {{model_class}}
    {
{{> properties}}
    }
}
";

/// Display (projection) model
pub const DISPLAY_TEMPLATE: &str = r"namespace {{namespace}}.Models.DisplayModels
{
    public class {{display_class}}
    {
{{> properties}}
    }
}
";

/// Persistence context
pub const CONTEXT_TEMPLATE: &str = r"using {{namespace}}.Models;
using Microsoft.EntityFrameworkCore;

namespace {{namespace}}.Contexts
{
    public class {{context_class}} : DbContext
    {
        public {{context_class}}(DbContextOptions<{{context_class}}> options)
            : base(options) { }

        protected override void OnModelCreating(ModelBuilder modelBuilder)
        {
            modelBuilder.Entity<{{model_class}}>().HasKey(x => x.{{identity_key}});
            base.OnModelCreating(modelBuilder);
        }

        public DbSet<{{model_class}}> {{model_class}} { get; set; }
    }
}
";

/// Repository interface
pub const INTERFACE_TEMPLATE: &str = r"using System.Collections.Generic;
using {{namespace}}.Models;
using {{namespace}}.Models.DisplayModels;

namespace {{namespace}}.Repositories
{
    public interface {{repository_interface}}
    {
        void Add({{model_class}} item);
        IEnumerable<{{model_class}}> GetAll();
        IEnumerable<{{display_class}}> GetAll({{model_class}} item);
        {{model_class}} Find(int id);
        void Remove(int id);
        void Update({{model_class}} item);
    }
}
";

/// Repository implementation, including the query-by-example filter
pub const REPOSITORY_TEMPLATE: &str = r"using System.Collections.Generic;
using System.Linq;
using {{namespace}}.Models;
using {{namespace}}.Contexts;
using {{namespace}}.Models.DisplayModels;

namespace {{namespace}}.Repositories
{
    public class {{repository_class}} : {{repository_interface}}
    {
        {{context_class}} _context;

        public {{repository_class}}({{context_class}} context)
        {
            _context = context;
        }

        public void Add({{model_class}} item)
        {
            _context.{{model_class}}.Add(item);
            _context.SaveChanges();
        }

        public {{model_class}} Find(int id)
        {
            return _context.{{model_class}}.Where(e => e.{{identity_key}} == id).SingleOrDefault();
        }

        public IEnumerable<{{model_class}}> GetAll()
        {
            return _context.{{model_class}}.ToList();
        }

        public IEnumerable<{{display_class}}> GetAll({{model_class}} item)
        {
            List<{{display_class}}> displayList = new List<{{display_class}}>();

            if (item != null)
            {
                foreach ({{model_class}} entry in _context.{{model_class}}.ToList())
                {
                    if (!Matches(entry, item))
                    {
                        continue;
                    }

                    {{display_class}} disp = new {{display_class}}();
{{#each fields}}
                    disp.{{name}} = entry.{{name}};
{{/each}}
                    displayList.Add(disp);
                }
            }

            return displayList;
        }

        private static bool Matches({{model_class}} entry, {{model_class}} item)
        {
            if (item.{{identity_key}} != 0 && entry.{{identity_key}} != item.{{identity_key}})
            {
                return false;
            }

{{#each fields}}
            if ({{filter_guard}})
            {
{{#if excluded}}
                return false;
{{else}}
                if (entry.{{name}} == null || !entry.{{name}}.Equals(item.{{name}}))
                {
                    return false;
                }
{{/if}}
            }
{{/each}}
            return true;
        }

        public void Remove(int id)
        {
            var itemToRemove = _context.{{model_class}}.SingleOrDefault(r => r.{{identity_key}} == id);
            if (itemToRemove != null)
            {
                _context.{{model_class}}.Remove(itemToRemove);
                _context.SaveChanges();
            }
        }

        public void Update({{model_class}} item)
        {
            var itemToUpdate = _context.{{model_class}}.SingleOrDefault(r => r.{{identity_key}} == item.{{identity_key}});
            if (itemToUpdate != null)
            {
{{#each fields}}
                itemToUpdate.{{name}} = item.{{name}};
{{/each}}
                _context.SaveChanges();
            }
        }
    }
}
";

/// API controller
pub const CONTROLLER_TEMPLATE: &str = r#"using System.Collections.Generic;
using {{namespace}}.Models;
using {{namespace}}.Models.DisplayModels;
using {{namespace}}.Repositories;
using Microsoft.AspNetCore.Mvc;

namespace {{namespace}}.Controllers
{
    [Route("api/[controller]")]
    public class {{controller_class}} : Controller
    {
        public {{repository_interface}} {{repo_property}} { get; set; }

        public {{controller_class}}({{repository_interface}} _repo)
        {
            {{repo_property}} = _repo;
        }

        [HttpGet("all")]
        public IEnumerable<{{model_class}}> GetAll()
        {
            return {{repo_property}}.GetAll();
        }

        [HttpGet]
        public IEnumerable<{{display_class}}> GetAll([FromQuery] {{model_class}} item)
        {
            return {{repo_property}}.GetAll(item);
        }

        [HttpGet("{id}", Name = "{{route_name}}")]
        public IActionResult GetById(int id)
        {
            var item = {{repo_property}}.Find(id);
            if (item == null)
            {
                return NotFound();
            }
            return new ObjectResult(item);
        }

        [HttpPost]
        public IActionResult Create([FromBody] {{model_class}} item)
        {
            if (item == null)
            {
                return BadRequest();
            }
            {{repo_property}}.Add(item);
            return CreatedAtRoute("{{route_name}}", new { Controller = "{{model_class}}", id = item.{{identity_key}} }, item);
        }

        [HttpPut("{id}")]
        public IActionResult Update(int id, [FromBody] {{model_class}} item)
        {
            if (item == null)
            {
                return BadRequest();
            }
            var existing = {{repo_property}}.Find(id);
            if (existing == null)
            {
                return NotFound();
            }
            {{repo_property}}.Update(item);
            return new NoContentResult();
        }

        [HttpDelete("{id}")]
        public void Delete(int id)
        {
            {{repo_property}}.Remove(id);
        }
    }
}
"#;
