//! Fixed discipline catalog: names, review texts and question banks.

/// A multiple-choice question with four labelled options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    /// Options already carry their letter, e.g. `"A) Charles Babbage"`.
    pub options: [&'static str; 4],
    /// Correct letter, `"A"` to `"D"`.
    pub answer: &'static str,
}

impl Question {
    /// `true` if `answer` (already normalized) is the correct letter.
    pub fn is_correct(&self, answer: &str) -> bool {
        self.answer == answer
    }
}

/// One subject area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discipline {
    pub name: &'static str,
    pub review: &'static str,
    pub questions: &'static [Question],
}

/// Discipline names in menu order.
pub const DISCIPLINES: [&str; 8] = [
    "Infraestrutura Computacional",
    "TIC",
    "Pensamento Lógico",
    "LGPD",
    "Cibersegurança",
    "Ética",
    "Direitos Humanos",
    "Matemática e Estatística",
];

/// Look up a discipline by exact name.
pub fn discipline(name: &str) -> Option<&'static Discipline> {
    CATALOG.iter().find(|d| d.name == name)
}

pub fn is_discipline(name: &str) -> bool {
    discipline(name).is_some()
}

/// Review paragraph for `name`, if it is a catalog discipline.
pub fn review_text(name: &str) -> Option<&'static str> {
    discipline(name).map(|d| d.review)
}

/// Question bank for `name`; empty for unknown disciplines.
pub fn questions(name: &str) -> &'static [Question] {
    discipline(name).map(|d| d.questions).unwrap_or(&[])
}

/// Every discipline, in the same order as [`DISCIPLINES`].
pub static CATALOG: [Discipline; 8] = [
    Discipline {
        name: "Infraestrutura Computacional",
        review: "Um sistema operacional gerencia hardware e permite uso de programas.",
        questions: INFRASTRUCTURE_QUESTIONS,
    },
    Discipline {
        name: "TIC",
        review: "Tecnologias que permitem comunicação e acesso à informação.",
        questions: ICT_QUESTIONS,
    },
    Discipline {
        name: "Pensamento Lógico",
        review: "Raciocínio para resolver problemas usando programação.",
        questions: LOGICAL_THINKING_QUESTIONS,
    },
    Discipline {
        name: "LGPD",
        review: "Lei que protege dados pessoais e garante privacidade.",
        questions: DATA_PROTECTION_QUESTIONS,
    },
    Discipline {
        name: "Cibersegurança",
        review: "Práticas para proteger sistemas contra ataques.",
        questions: CYBERSECURITY_QUESTIONS,
    },
    Discipline {
        name: "Ética",
        review: "Uso consciente da tecnologia com respeito social e ambiental.",
        questions: ETHICS_QUESTIONS,
    },
    Discipline {
        name: "Direitos Humanos",
        review: "Garantias de liberdade, igualdade e inclusão digital.",
        questions: HUMAN_RIGHTS_QUESTIONS,
    },
    Discipline {
        name: "Matemática e Estatística",
        review: "Ferramentas para análise de dados, como média, moda e mediana.",
        questions: MATH_STATS_QUESTIONS,
    },
];

const INFRASTRUCTURE_QUESTIONS: &[Question] = &[
    Question {
        prompt: "Quem é considerado o pai do computador?",
        options: [
            "A) Charles Babbage",
            "B) Alan Turing",
            "C) Bill Gates",
            "D) Steve Jobs",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é memória RAM?",
        options: [
            "A) Armazenamento permanente",
            "B) Processador",
            "C) Memória de acesso aleatório",
            "D) Disco rígido",
        ],
        answer: "C",
    },
    Question {
        prompt: "O que é armazenamento de longo prazo?",
        options: [
            "A) Memória RAM",
            "B) Processador",
            "C) Hard Disk ou SSD",
            "D) Cache",
        ],
        answer: "C",
    },
    Question {
        prompt: "O que significa CPU?",
        options: [
            "A) Unidade Central de Processamento",
            "B) Memória de Vídeo",
            "C) Sistema Operacional",
            "D) Fonte de energia",
        ],
        answer: "A",
    },
    Question {
        prompt: "Para que serve o sistema operacional?",
        options: [
            "A) Controlar hardware e software",
            "B) Armazenar dados",
            "C) Aumentar memória",
            "D) Melhorar velocidade",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é gerenciamento de processos?",
        options: [
            "A) Controle de tarefas executadas",
            "B) Backup",
            "C) Armazenamento em nuvem",
            "D) Segurança",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é hardware?",
        options: [
            "A) Programas",
            "B) Componentes físicos",
            "C) Aplicativos",
            "D) Banco de dados",
        ],
        answer: "B",
    },
    Question {
        prompt: "O que é software?",
        options: [
            "A) Placa-mãe",
            "B) Conjunto de programas",
            "C) Processador",
            "D) Disco rígido",
        ],
        answer: "B",
    },
    Question {
        prompt: "Principais componentes de hardware?",
        options: [
            "A) Teclado, mouse, monitor",
            "B) Word e Excel",
            "C) Aplicativos",
            "D) PDF",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é memória cache?",
        options: [
            "A) Memória auxiliar ao processador",
            "B) Armazenamento na nuvem",
            "C) Banco de dados",
            "D) Backup",
        ],
        answer: "A",
    },
];

const ICT_QUESTIONS: &[Question] = &[
    Question {
        prompt: "O que significa TIC?",
        options: [
            "A) Tecnologia da Informação e Comunicação",
            "B) Transporte Internacional Comercial",
            "C) Técnica Integrada de Computadores",
            "D) Terminal de Informação Coletiva",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é a internet?",
        options: [
            "A) Rede mundial de computadores",
            "B) Sistema de arquivos",
            "C) Programa de segurança",
            "D) Sistema operacional",
        ],
        answer: "A",
    },
    Question {
        prompt: "Década do surgimento da internet comercial?",
        options: [
            "A) 1970",
            "B) 1980",
            "C) 1990",
            "D) 2000",
        ],
        answer: "C",
    },
    Question {
        prompt: "Para que serve o Word?",
        options: [
            "A) Editar textos",
            "B) Fazer planilhas",
            "C) Criar bancos de dados",
            "D) Programar",
        ],
        answer: "A",
    },
    Question {
        prompt: "Como salvar um arquivo no Word?",
        options: [
            "A) Arquivo > Salvar",
            "B) Editar > Cortar",
            "C) Exibir > Zoom",
            "D) Inserir > Tabela",
        ],
        answer: "A",
    },
    Question {
        prompt: "Para que serve o Excel?",
        options: [
            "A) Criar textos",
            "B) Editar imagens",
            "C) Criar planilhas",
            "D) Reproduzir vídeos",
        ],
        answer: "C",
    },
    Question {
        prompt: "Função de somar no Excel?",
        options: [
            "A) =SOMA()",
            "B) =MULT()",
            "C) =DIV()",
            "D) =SUB()",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é um gráfico no Excel?",
        options: [
            "A) Representação visual dos dados",
            "B) Arquivo de texto",
            "C) Programa",
            "D) Fórmula matemática",
        ],
        answer: "A",
    },
    Question {
        prompt: "Como proteger arquivo no Excel?",
        options: [
            "A) Inserir senha",
            "B) Apagar arquivo",
            "C) Copiar arquivo",
            "D) Abrir arquivo",
        ],
        answer: "A",
    },
    Question {
        prompt: "Qual a importância da TIC?",
        options: [
            "A) Facilitar comunicação",
            "B) Armazenar papel",
            "C) Desenhar imagens",
            "D) Fazer backup",
        ],
        answer: "A",
    },
];

const LOGICAL_THINKING_QUESTIONS: &[Question] = &[
    Question {
        prompt: "O que é uma variável?",
        options: [
            "A) Espaço para guardar dados",
            "B) Função matemática",
            "C) Programa",
            "D) Entrada de dados",
        ],
        answer: "A",
    },
    Question {
        prompt: "Qual a linguagem usada aqui?",
        options: [
            "A) Python",
            "B) Java",
            "C) C++",
            "D) HTML",
        ],
        answer: "A",
    },
    Question {
        prompt: "Qual símbolo para igualdade em Python?",
        options: [
            "A) =",
            "B) ==",
            "C) !=",
            "D) >",
        ],
        answer: "B",
    },
    Question {
        prompt: "O que é um laço?",
        options: [
            "A) Repetição de comandos",
            "B) Função",
            "C) Variável",
            "D) Entrada de dados",
        ],
        answer: "A",
    },
    Question {
        prompt: "Como criar uma função em Python?",
        options: [
            "A) def nome():",
            "B) function nome()",
            "C) func nome{}",
            "D) function nome[]",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é JSON?",
        options: [
            "A) Formato para dados",
            "B) Banco de dados",
            "C) Programa",
            "D) Editor de texto",
        ],
        answer: "A",
    },
    Question {
        prompt: "Como iniciar um comentário em Python?",
        options: [
            "A) # comentário",
            "B) // comentário",
            "C) /* comentário */",
            "D) <!-- comentário -->",
        ],
        answer: "A",
    },
    Question {
        prompt: "Qual estrutura para decisão?",
        options: [
            "A) if",
            "B) for",
            "C) while",
            "D) def",
        ],
        answer: "A",
    },
    Question {
        prompt: "Como criar uma lista?",
        options: [
            "A) lista = []",
            "B) lista = {}",
            "C) lista = ()",
            "D) lista = <>",
        ],
        answer: "A",
    },
    Question {
        prompt: "Qual operador para 'e' lógico?",
        options: [
            "A) and",
            "B) or",
            "C) not",
            "D) xor",
        ],
        answer: "A",
    },
];

const DATA_PROTECTION_QUESTIONS: &[Question] = &[
    Question {
        prompt: "O que significa LGPD?",
        options: [
            "A) Lei Geral de Proteção de Dados",
            "B) Lei Geral de Processos Digitais",
            "C) Lei de Garantia de Privacidade",
            "D) Lei de Gestão Pública Digital",
        ],
        answer: "A",
    },
    Question {
        prompt: "Qual o objetivo da LGPD?",
        options: [
            "A) Proteger dados pessoais",
            "B) Facilitar venda de dados",
            "C) Permitir acesso livre",
            "D) Eliminar dados",
        ],
        answer: "A",
    },
    Question {
        prompt: "Quem deve cumprir a LGPD?",
        options: [
            "A) Empresas e pessoas que tratam dados",
            "B) Só o governo",
            "C) Só bancos",
            "D) Só escolas",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é dado pessoal?",
        options: [
            "A) Informação que identifica uma pessoa",
            "B) Dados de empresas",
            "C) Dados públicos",
            "D) Dados anônimos",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é consentimento?",
        options: [
            "A) Permissão para usar dados",
            "B) Venda de dados",
            "C) Apagar dados",
            "D) Compartilhar dados",
        ],
        answer: "A",
    },
    Question {
        prompt: "Quem pode acessar seus dados?",
        options: [
            "A) Só com sua autorização",
            "B) Qualquer pessoa",
            "C) Só empresas",
            "D) Governo",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que fazer se seus dados forem vazados?",
        options: [
            "A) Reportar às autoridades",
            "B) Ignorar",
            "C) Vender os dados",
            "D) Apagar o computador",
        ],
        answer: "A",
    },
    Question {
        prompt: "Como proteger seus dados?",
        options: [
            "A) Usar senhas fortes",
            "B) Compartilhar senhas",
            "C) Deixar redes abertas",
            "D) Salvar em computadores públicos",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que a empresa deve informar?",
        options: [
            "A) Como usa seus dados",
            "B) Segredo comercial",
            "C) Nada",
            "D) Só o nome",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é privacidade?",
        options: [
            "A) Direito de controlar dados pessoais",
            "B) Vender dados",
            "C) Usar dados de outros",
            "D) Divulgar informações",
        ],
        answer: "A",
    },
];

const CYBERSECURITY_QUESTIONS: &[Question] = &[
    Question {
        prompt: "O que é cibersegurança?",
        options: [
            "A) Proteção de sistemas digitais",
            "B) Programação",
            "C) Rede social",
            "D) Computador",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é um vírus de computador?",
        options: [
            "A) Programa malicioso",
            "B) Programa educativo",
            "C) Programa de segurança",
            "D) Sistema operacional",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é phishing?",
        options: [
            "A) Ataque para roubar dados",
            "B) Backup",
            "C) Atualização de sistema",
            "D) Programa de edição",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é firewall?",
        options: [
            "A) Barreira de proteção digital",
            "B) Hardware",
            "C) Programa de edição",
            "D) Computador antigo",
        ],
        answer: "A",
    },
    Question {
        prompt: "Por que usar senhas fortes?",
        options: [
            "A) Evitar invasões",
            "B) Facilitar acesso",
            "C) Guardar dados",
            "D) Compartilhar contas",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é atualização de software?",
        options: [
            "A) Corrigir falhas e melhorar segurança",
            "B) Apagar arquivos",
            "C) Comprar programas",
            "D) Instalar jogos",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que não fazer para manter segurança?",
        options: [
            "A) Compartilhar senhas",
            "B) Usar antivírus",
            "C) Atualizar sistema",
            "D) Evitar links suspeitos",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é autenticação?",
        options: [
            "A) Verificar identidade",
            "B) Apagar dados",
            "C) Programar",
            "D) Compartilhar senhas",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é ransomware?",
        options: [
            "A) Sequestro de dados por vírus",
            "B) Backup automático",
            "C) Atualização de software",
            "D) Computador rápido",
        ],
        answer: "A",
    },
    Question {
        prompt: "Como evitar ataques?",
        options: [
            "A) Não abrir anexos desconhecidos",
            "B) Compartilhar arquivos",
            "C) Usar senhas simples",
            "D) Desligar antivírus",
        ],
        answer: "A",
    },
];

const ETHICS_QUESTIONS: &[Question] = &[
    Question {
        prompt: "O que é ética na tecnologia?",
        options: [
            "A) Uso responsável e justo",
            "B) Usar tudo sem limites",
            "C) Copiar conteúdos",
            "D) Ignorar direitos",
        ],
        answer: "A",
    },
    Question {
        prompt: "Por que economizar energia?",
        options: [
            "A) Preservar o meio ambiente",
            "B) Gastar mais",
            "C) Aumentar poluição",
            "D) Gastar dinheiro",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é descarte correto de lixo eletrônico?",
        options: [
            "A) Levar para pontos de coleta",
            "B) Jogar no lixo comum",
            "C) Queimar lixo",
            "D) Jogar em rios",
        ],
        answer: "A",
    },
    Question {
        prompt: "Como agir com respeito online?",
        options: [
            "A) Não praticar bullying",
            "B) Insultar pessoas",
            "C) Espalhar fake news",
            "D) Invadir contas",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é cidadania digital?",
        options: [
            "A) Uso consciente da internet",
            "B) Usar a internet sem regras",
            "C) Ignorar leis",
            "D) Compartilhar senhas",
        ],
        answer: "A",
    },
    Question {
        prompt: "Por que respeitar privacidade?",
        options: [
            "A) Direito de todos",
            "B) Invadir contas",
            "C) Espalhar informações",
            "D) Usar dados alheios",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é inclusão digital?",
        options: [
            "A) Acesso de todos à tecnologia",
            "B) Excluir pessoas",
            "C) Usar só computadores antigos",
            "D) Compartilhar senhas",
        ],
        answer: "A",
    },
    Question {
        prompt: "Como contribuir para sustentabilidade?",
        options: [
            "A) Reutilizar e reciclar",
            "B) Jogar lixo no chão",
            "C) Gastar muita energia",
            "D) Desperdiçar água",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é transparência digital?",
        options: [
            "A) Clareza no uso de dados",
            "B) Esconder informações",
            "C) Compartilhar senhas",
            "D) Invadir contas",
        ],
        answer: "A",
    },
    Question {
        prompt: "Por que agir com ética?",
        options: [
            "A) Construir confiança",
            "B) Enganar pessoas",
            "C) Copiar trabalhos",
            "D) Quebrar regras",
        ],
        answer: "A",
    },
];

const HUMAN_RIGHTS_QUESTIONS: &[Question] = &[
    Question {
        prompt: "O que são Direitos Humanos?",
        options: [
            "A) Garantias de liberdade e igualdade",
            "B) Regras só para governos",
            "C) Direito de algumas pessoas",
            "D) Leis para empresas",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é inclusão digital?",
        options: [
            "A) Acesso universal à tecnologia",
            "B) Excluir pessoas da internet",
            "C) Controlar uso de dados",
            "D) Proibir internet",
        ],
        answer: "A",
    },
    Question {
        prompt: "Qual documento protege Direitos Humanos?",
        options: [
            "A) Declaração Universal dos Direitos Humanos",
            "B) Constituição",
            "C) Código Civil",
            "D) Estatuto do Idoso",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é igualdade?",
        options: [
            "A) Todos têm os mesmos direitos",
            "B) Alguns têm mais direitos",
            "C) Só alguns podem usar tecnologia",
            "D) Discriminação",
        ],
        answer: "A",
    },
    Question {
        prompt: "Direito à privacidade inclui?",
        options: [
            "A) Controle sobre seus dados pessoais",
            "B) Exposição forçada",
            "C) Compartilhar dados sem consentimento",
            "D) Vender dados",
        ],
        answer: "A",
    },
    Question {
        prompt: "Como promover inclusão?",
        options: [
            "A) Facilitar acesso e educação digital",
            "B) Bloquear acesso",
            "C) Impedir uso de tecnologia",
            "D) Ignorar grupos",
        ],
        answer: "A",
    },
    Question {
        prompt: "Quem deve respeitar Direitos Humanos?",
        options: [
            "A) Todos",
            "B) Só o governo",
            "C) Só empresas",
            "D) Ninguém",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é discriminação digital?",
        options: [
            "A) Negar acesso por raça ou renda",
            "B) Permitir acesso a todos",
            "C) Educar sobre tecnologia",
            "D) Proteger dados",
        ],
        answer: "A",
    },
    Question {
        prompt: "Direito de acesso à informação é?",
        options: [
            "A) Acesso à internet e dados públicos",
            "B) Proibir acesso",
            "C) Cobrar caro pela internet",
            "D) Bloquear sites",
        ],
        answer: "A",
    },
    Question {
        prompt: "Por que proteger dados pessoais?",
        options: [
            "A) Preservar direitos e segurança",
            "B) Vender para terceiros",
            "C) Compartilhar sem controle",
            "D) Ignorar leis",
        ],
        answer: "A",
    },
];

const MATH_STATS_QUESTIONS: &[Question] = &[
    Question {
        prompt: "O que é média aritmética?",
        options: [
            "A) Soma dos valores dividida pela quantidade",
            "B) Maior valor",
            "C) Menor valor",
            "D) Valor mais frequente",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é moda em estatística?",
        options: [
            "A) Valor que mais se repete",
            "B) Média dos valores",
            "C) Valor mínimo",
            "D) Valor máximo",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é mediana?",
        options: [
            "A) Valor central ordenado",
            "B) Soma dos valores",
            "C) Valor mais frequente",
            "D) Diferença entre valores",
        ],
        answer: "A",
    },
    Question {
        prompt: "Como calcular média?",
        options: [
            "A) Somar e dividir",
            "B) Multiplicar",
            "C) Subtrair",
            "D) Dividir e somar",
        ],
        answer: "A",
    },
    Question {
        prompt: "Qual é o valor da moda em [2, 3, 3, 5]?",
        options: [
            "A) 3",
            "B) 2",
            "C) 5",
            "D) Nenhum",
        ],
        answer: "A",
    },
    Question {
        prompt: "Qual a mediana de [1, 3, 5]?",
        options: [
            "A) 3",
            "B) 1",
            "C) 5",
            "D) 2",
        ],
        answer: "A",
    },
    Question {
        prompt: "Para que serve a estatística?",
        options: [
            "A) Analisar dados",
            "B) Jogar",
            "C) Pintar",
            "D) Cozinhar",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que é desvio padrão?",
        options: [
            "A) Medida de dispersão dos dados",
            "B) Média",
            "C) Moda",
            "D) Mediana",
        ],
        answer: "A",
    },
    Question {
        prompt: "O que significa 'frequência' em estatística?",
        options: [
            "A) Quantidade de vezes que um valor aparece",
            "B) Média dos valores",
            "C) Diferença entre valores",
            "D) Soma dos valores",
        ],
        answer: "A",
    },
    Question {
        prompt: "Qual é a média de [4, 6, 8]?",
        options: [
            "A) 6",
            "B) 4",
            "C) 8",
            "D) 7",
        ],
        answer: "A",
    },
];
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_matches_discipline_list() {
        let names: Vec<&str> = CATALOG.iter().map(|d| d.name).collect();
        assert_eq!(names, DISCIPLINES);
    }

    #[test]
    fn every_discipline_has_review_and_ten_questions() {
        for d in &CATALOG {
            assert!(!d.review.is_empty(), "{} has no review text", d.name);
            assert_eq!(d.questions.len(), 10, "{} question count", d.name);
        }
    }

    #[test]
    fn answers_are_letters_with_matching_option() {
        for d in &CATALOG {
            for q in d.questions {
                assert!(
                    ["A", "B", "C", "D"].contains(&q.answer),
                    "bad answer in {}: {}",
                    d.name,
                    q.prompt
                );
                for (option, letter) in q.options.iter().zip(["A", "B", "C", "D"]) {
                    assert!(option.starts_with(&format!("{letter})")));
                }
            }
        }
    }

    #[test]
    fn lookups() {
        assert!(is_discipline("LGPD"));
        assert!(!is_discipline("Disciplina Inexistente"));
        assert!(review_text("TIC").unwrap().contains("comunicação"));
        assert!(questions("Disciplina Inexistente").is_empty());
        assert!(questions("Ética")[0].is_correct("A"));
    }
}
